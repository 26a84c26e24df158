//! Chat-completion seam implemented by hosted model clients.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Result;
use crate::prompt::{MAX_TOKENS, TEMPERATURE};

/// A single-message completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// Content of the user message.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Creates a request with the default sampling parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::now_v7(),
            prompt: prompt.into(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }

    /// Sets the request identifier.
    pub fn with_request_id(mut self, request_id: Uuid) -> Self {
        self.request_id = request_id;
        self
    }
}

/// Text returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Request ID this response corresponds to.
    pub request_id: Uuid,
    /// Content of the first choice.
    pub content: String,
    /// Model that produced the content, when reported.
    pub model: Option<String>,
    /// Total tokens billed, when reported.
    pub total_tokens: Option<u32>,
}

impl CompletionResponse {
    /// Creates a response with the given content.
    pub fn new(request_id: Uuid, content: impl Into<String>) -> Self {
        Self {
            request_id,
            content: content.into(),
            model: None,
            total_tokens: None,
        }
    }
}

/// A hosted language model.
///
/// Implementations make exactly one attempt and report every failure as
/// [`ErrorKind::RemoteGeneration`](crate::ErrorKind::RemoteGeneration).
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends the request and returns the first choice's content.
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}
