//! Middleware configuration for the HTTP server.
//!
//! Groups the CORS, body limit and recovery settings exported by
//! `examforge-server`. Each supports both CLI arguments and environment
//! variables.
//!
//! # Example
//!
//! ```bash
//! # Configure CORS origins and request timeout
//! examforge --allowed-origins "https://example.com" --request-timeout 60
//! ```

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use examforge_server::middleware::{BodyLimitConfig, CorsConfig, RecoveryConfig};
use serde::{Deserialize, Serialize};

use super::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS, body limit and recovery settings.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// Maximum accepted request body.
    #[clap(flatten)]
    pub body_limit: BodyLimitConfig,

    /// Recovery middleware configuration.
    ///
    /// Controls request timeout and panic recovery behavior.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,
}

impl MiddlewareConfig {
    /// Validates the request timeout and body limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the request timeout is outside 1-300 seconds or
    /// the body limit is zero.
    pub fn validate(&self) -> AnyhowResult<()> {
        let timeout = self.recovery.request_timeout;
        if timeout == 0 || timeout > 300 {
            return Err(anyhow!(
                "Request timeout {timeout} seconds is invalid. Must be between 1 and 300 seconds."
            ));
        }

        if self.body_limit.max_upload_size == 0 {
            return Err(anyhow!("Maximum upload size must be greater than 0 bytes."));
        }

        Ok(())
    }

    /// Logs middleware configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            max_upload_size = self.body_limit.max_upload_size,
            request_timeout_secs = self.recovery.request_timeout,
            "Request limits configuration"
        );
    }
}
