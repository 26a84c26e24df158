//! Mock completion provider for testing.
//!
//! Returns a configurable canned response, so tests and local runs can
//! exercise the remote generation path without a network. Prompt recording
//! is opt-in through [`MockCompletionProvider::recording`].
//!
//! # Feature Flag
//!
//! This module is only available when the `mock` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! examforge-core = { version = "...", features = ["mock"] }
//! ```

use std::sync::{Arc, Mutex, PoisonError};

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::service::{
    CompletionProvider, CompletionRequest, CompletionResponse, ExerciseGenerationService,
    RemoteExerciseProvider,
};
use crate::{Error, Result};

/// Response returned when none is configured.
pub const DEFAULT_MOCK_RESPONSE: &str = "【核心长难句三纽扣拆解】\n1. ⚡引擎纽扣: is\n";

/// Configuration for the mock provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct MockConfig {
    /// Content returned for every completion.
    #[cfg_attr(feature = "config", arg(long = "mock-response", env = "MOCK_RESPONSE"))]
    #[serde(default)]
    pub mock_response: Option<String>,

    /// Fail every completion with a remote generation error.
    #[cfg_attr(feature = "config", arg(long = "mock-fail", env = "MOCK_FAIL", default_value_t = false))]
    #[serde(default)]
    pub fail: bool,
}

impl MockConfig {
    /// Builds a remote generation service backed by the mock provider.
    pub fn into_service(self) -> ExerciseGenerationService {
        MockCompletionProvider::new(self).into_service()
    }
}

/// Deterministic [`CompletionProvider`].
#[derive(Debug, Clone)]
pub struct MockCompletionProvider {
    config: Arc<MockConfig>,
    /// Received prompts; `None` unless recording was requested.
    prompts: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockCompletionProvider {
    /// Creates a new mock provider with the given configuration.
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
            prompts: None,
        }
    }

    /// Creates a mock provider that always answers `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::new(MockConfig {
            mock_response: Some(response.into()),
            ..MockConfig::default()
        })
    }

    /// Creates a mock provider whose every call fails.
    pub fn failing() -> Self {
        Self::new(MockConfig {
            fail: true,
            ..MockConfig::default()
        })
    }

    /// Keeps every prompt received from now on, for inspection with
    /// [`prompts`]. Clones share the same log.
    ///
    /// [`prompts`]: Self::prompts
    pub fn recording(mut self) -> Self {
        self.prompts = Some(Arc::default());
        self
    }

    /// Returns the recorded prompts, oldest first; empty unless recording.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .as_ref()
            .map(|prompts| prompts.lock().unwrap_or_else(PoisonError::into_inner).clone())
            .unwrap_or_default()
    }

    /// Wraps this provider in a remote generation service.
    pub fn into_service(self) -> ExerciseGenerationService {
        ExerciseGenerationService::new(RemoteExerciseProvider::new(self))
    }
}

#[async_trait::async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        if let Some(prompts) = &self.prompts {
            prompts
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(request.prompt.clone());
        }

        if self.config.fail {
            return Err(Error::remote_generation().with_message("mock provider configured to fail"));
        }

        let content = self
            .config
            .mock_response
            .clone()
            .unwrap_or_else(|| DEFAULT_MOCK_RESPONSE.to_owned());

        Ok(CompletionResponse {
            model: Some("mock".to_owned()),
            ..CompletionResponse::new(request.request_id, content)
        })
    }
}
