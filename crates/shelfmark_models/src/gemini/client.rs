//! REST client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use tracing::{debug, instrument, warn};

use shelfmark_config::GeminiConfig;
use shelfmark_core::{GenerateRequest, GenerateResponse};
use shelfmark_error::{GenerationError, GenerationErrorKind, ShelfmarkResult};
use shelfmark_interface::TextGenerator;

use super::GeminiResult;
use super::dto::{GenerateContentRequest, GenerateContentResponse};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Gemini REST client.
///
/// One HTTP client is shared across models; a request may override the
/// default model through `GenerateRequest::model`.
///
/// # Example
///
/// ```no_run
/// use shelfmark_core::{GenerateRequest, Tool};
/// use shelfmark_interface::TextGenerator;
/// use shelfmark_models::GeminiClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
/// let request = GenerateRequest::builder()
///     .prompt("Book Title: The Rust Programming Language")
///     .tools(vec![Tool::GoogleSearch])
///     .build()?;
/// let response = client.generate(&request).await?;
/// println!("{}", response.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model_name: String,
    timeout_secs: u64,
}

impl GeminiClient {
    /// Creates a client with default settings, reading the key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or the HTTP client
    /// cannot be initialized.
    pub fn new() -> ShelfmarkResult<Self> {
        Self::from_config(&GeminiConfig::default())
    }

    /// Creates a client from configuration, reading the key from `GEMINI_API_KEY`.
    #[instrument(skip_all, fields(model = %config.model))]
    pub fn from_config(config: &GeminiConfig) -> ShelfmarkResult<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::MissingApiKey))?;

        Ok(Self::with_api_key(api_key, config)?)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_api_key(api_key: impl Into<String>, config: &GeminiConfig) -> GeminiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string()))
            })?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_name: config.model.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Endpoint URL for a model, accepting both `gemini-x` and `models/gemini-x`.
    fn endpoint(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    #[instrument(skip(self, req), fields(model))]
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = req.model().as_deref().unwrap_or(&self.model_name);
        tracing::Span::current().record("model", model);

        let url = self.endpoint(model);
        let body = GenerateContentRequest::from(req);
        debug!(url = %url, tools = body.tools.len(), "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::new(GenerationErrorKind::Timeout(self.timeout_secs))
                } else {
                    GenerationError::new(GenerationErrorKind::Request(e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini returned an error status");
            return Err(GenerationError::new(GenerationErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            GenerationError::new(GenerationErrorKind::Request(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        if let Some(reason) = parsed
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            debug!(finish_reason = reason, "Gemini candidate finished");
        }

        let text = parsed
            .text()
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;
        debug!(chars = text.len(), "Received Gemini response");

        Ok(GenerateResponse::new(text))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> ShelfmarkResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    /// Returns the model used when `GenerateRequest::model` is `None`.
    fn model_name(&self) -> &str {
        &self.model_name
    }
}
