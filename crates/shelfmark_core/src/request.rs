//! Request and response types for text generation.

use serde::{Deserialize, Serialize};

/// Server-side tool the generation backend may use while answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Ground the answer with web search results.
    #[display("google_search")]
    GoogleSearch,
}

/// Single-turn text generation request.
///
/// # Examples
///
/// ```
/// use shelfmark_core::{GenerateRequest, Tool};
///
/// let request = GenerateRequest::builder()
///     .prompt("List the chapters of 'The Rust Programming Language'")
///     .tools(vec![Tool::GoogleSearch])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.tools(), &[Tool::GoogleSearch]);
/// assert!(request.model().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Prompt text sent as the single user turn
    prompt: String,
    /// Model override; the backend default is used when `None`
    #[builder(default)]
    model: Option<String>,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Maximum number of output tokens
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Tools the backend should enable
    #[builder(default)]
    tools: Vec<Tool>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Raw text returned by a generation backend.
///
/// The text is untrusted: it may wrap the requested JSON in prose or fences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Concatenated text output
    pub text: String,
}

impl GenerateResponse {
    /// Wrap raw text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
