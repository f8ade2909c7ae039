//! Wire types for the Gemini `generateContent` REST endpoint.

use serde::{Deserialize, Serialize};
use shelfmark_core::{GenerateRequest, Tool};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns (a single user turn here)
    pub contents: Vec<Content>,
    /// Server-side tools
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolSpec>,
    /// Sampling parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default)]
    pub role: String,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part; only text parts are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Tool declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSpec {
    /// Search grounding; serialized as `{}`
    #[serde(rename = "google_search", skip_serializing_if = "Option::is_none")]
    pub google_search: Option<GoogleSearch>,
}

/// Empty marker object enabling search grounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoogleSearch {}

/// Sampling parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate answers; only the first is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A candidate answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl From<&GenerateRequest> for GenerateContentRequest {
    fn from(req: &GenerateRequest) -> Self {
        let tools = req
            .tools()
            .iter()
            .map(|tool| match tool {
                Tool::GoogleSearch => ToolSpec {
                    google_search: Some(GoogleSearch {}),
                },
            })
            .collect();

        let generation_config = (req.temperature().is_some() || req.max_tokens().is_some())
            .then(|| GenerationConfig {
                temperature: *req.temperature(),
                max_output_tokens: *req.max_tokens(),
            });

        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: Some(req.prompt().clone()),
                }],
            }],
            tools,
            generation_config,
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }
}
