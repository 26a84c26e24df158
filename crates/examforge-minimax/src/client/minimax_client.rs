//! MiniMax client implementation
//!
//! This module provides the main client interface for MiniMax API operations.
//! It handles authentication, request/response processing, and connection
//! management.

use jiff::Timestamp;
use reqwest::{Client as HttpClient, ClientBuilder, Method};

use super::{MiniMaxConfig, MiniMaxCredentials};
use crate::completion::{CHAT_COMPLETION_PATH, ChatCompletionRequest, ChatCompletionResponse};
use crate::{Error, Result, TRACING_TARGET_API, TRACING_TARGET_CLIENT};

/// MiniMax client for the chat-completion API.
///
/// Cloning is cheap: the underlying HTTP connection pool is shared.
///
/// # Examples
///
/// ```rust,no_run
/// use examforge_minimax::{MiniMaxClient, MiniMaxConfig, MiniMaxCredentials};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MiniMaxConfig::builder()
///     .with_model("abab6.5-chat")
///     .build()?;
///
/// let credentials = MiniMaxCredentials::new("api-key", "group-id");
/// let client = MiniMaxClient::new(config, credentials)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MiniMaxClient {
    http_client: HttpClient,
    config: MiniMaxConfig,
    credentials: MiniMaxCredentials,
}

impl MiniMaxClient {
    /// Create a new MiniMax client with the given configuration and credentials
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: MiniMaxConfig, credentials: MiniMaxCredentials) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            base_url = %config.base_url,
            model = %config.model,
            timeout_secs = config.timeout_secs,
            "Creating MiniMax client"
        );

        let http_client = ClientBuilder::new()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(Error::Http)?;

        tracing::info!(
            target: TRACING_TARGET_CLIENT,
            model = %config.model,
            "MiniMax client created successfully"
        );

        Ok(Self {
            http_client,
            config,
            credentials,
        })
    }

    /// Create a client from a configuration that carries its own credentials.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key or group id is missing.
    pub fn from_config(config: MiniMaxConfig) -> Result<Self> {
        let credentials = config.credentials()?;
        Self::new(config, credentials)
    }

    /// Get the client configuration
    pub fn config(&self) -> &MiniMaxConfig {
        &self.config
    }

    /// Send a chat-completion request.
    ///
    /// Makes exactly one attempt.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_API,
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .request(Method::POST, CHAT_COMPLETION_PATH)?
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(
                    target: TRACING_TARGET_API,
                    error = %err,
                    "Chat completion request failed"
                );
                Error::Http(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(
                target: TRACING_TARGET_API,
                status = status.as_u16(),
                body = %message,
                "Chat completion returned an error status"
            );

            return Err(Error::api_error(status.as_u16(), message));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(Error::Http)?;
        let elapsed = Timestamp::now().duration_since(started_at);

        tracing::debug!(
            target: TRACING_TARGET_API,
            status = status.as_u16(),
            choices = body.choices.len(),
            total_tokens = body.usage.as_ref().map(|u| u.total_tokens),
            elapsed_ms = elapsed.as_millis(),
            "Chat completion received"
        );

        Ok(body)
    }

    /// Add authentication headers to a request
    fn add_auth_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .bearer_auth(self.credentials.api_key())
            .query(&[("GroupId", self.credentials.group_id())])
    }

    /// Create a new request builder with base configuration
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder> {
        let url = self
            .config
            .base_url
            .join(path)
            .map_err(|e| Error::invalid_config(format!("Invalid request URL: {e}")))?;

        let request = self.http_client.request(method, url);
        Ok(self.add_auth_headers(request))
    }
}
