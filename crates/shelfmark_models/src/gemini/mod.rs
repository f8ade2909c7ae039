//! Google Gemini REST client.
//!
//! Talks to `models/{model}:generateContent` directly so that server-side
//! tools such as search grounding can be enabled per request.

mod client;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GoogleSearch, Part, ToolSpec,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, shelfmark_error::GenerationError>;
