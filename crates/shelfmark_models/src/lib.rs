//! Text generation backends for Shelfmark.
//!
//! Each backend implements [`shelfmark_interface::TextGenerator`]. Backends
//! are gated behind cargo features; `gemini` is on by default.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "gemini")]
pub use gemini::{
    Candidate, Content, GeminiClient, GeminiResult, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, GoogleSearch, Part, ToolSpec,
};
