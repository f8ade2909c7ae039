//! Mock text generator.

use async_trait::async_trait;
use shelfmark_core::{GenerateRequest, GenerateResponse};
use shelfmark_error::{GenerationError, GenerationErrorKind, ShelfmarkError, ShelfmarkResult};
use shelfmark_interface::TextGenerator;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Always fail with the given error
    Error(GenerationErrorKind),
    /// Sleep for the duration before answering with the text
    Delayed(Duration, String),
    /// Answer from a sequence, failing once it runs out
    Sequence(Vec<MockResponse>),
}

/// A single mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GenerationErrorKind),
}

/// Mock generator that records every request it receives.
pub struct MockGenerator {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[allow(dead_code)]
impl MockGenerator {
    /// Always succeed with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Always fail with the given error.
    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Answer after a delay.
    pub fn new_delayed(delay: Duration, text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Delayed(delay, text.into()))
    }

    /// Answer from a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GenerateRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    fn fail(kind: GenerationErrorKind) -> ShelfmarkResult<GenerateResponse> {
        Err(ShelfmarkError::from(GenerationError::new(kind)))
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, req: &GenerateRequest) -> ShelfmarkResult<GenerateResponse> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        match &self.behavior {
            MockBehavior::Success(text) => Ok(GenerateResponse::new(text.clone())),
            MockBehavior::Error(kind) => Self::fail(kind.clone()),
            MockBehavior::Delayed(delay, text) => {
                tokio::time::sleep(*delay).await;
                Ok(GenerateResponse::new(text.clone()))
            }
            MockBehavior::Sequence(responses) => match responses.get(call) {
                Some(MockResponse::Success(text)) => Ok(GenerateResponse::new(text.clone())),
                Some(MockResponse::Error(kind)) => Self::fail(kind.clone()),
                None => Self::fail(GenerationErrorKind::Request(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    call + 1,
                    responses.len()
                ))),
            },
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
