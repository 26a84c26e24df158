//! CLI configuration management.
//!
//! This module defines the complete CLI configuration hierarchy:
//!
//! ```text
//! Cli
//! ├── server: ServerConfig          # Host, port, TLS, shutdown
//! ├── middleware: MiddlewareConfig  # CORS, body limit, request timeout
//! ├── generation: GenerationConfig  # Local or remote mode, defaults
//! ├── minimax: MiniMaxConfig        # MiniMax credentials and model
//! └── mock: MockConfig              # Canned remote responses (feature-gated)
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Remote generation on port 8080
//! examforge --generation-mode remote --minimax-api-key "..." --minimax-group-id "..." --port 8080
//!
//! # Or via environment variables
//! GENERATION_MODE=remote MINIMAX_API_KEY="..." MINIMAX_GROUP_ID="..." PORT=8080 examforge
//! ```

mod generation;
mod middleware;
mod provider;
mod server;

use std::process;

use anyhow::Context;
use clap::Parser;
use examforge_core::GenerationMode;
use examforge_minimax::MiniMaxConfig;
pub use generation::GenerationConfig;
pub use middleware::MiddlewareConfig;
pub use provider::create_generation_service;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{TRACING_TARGET_CONFIG, TRACING_TARGET_SERVER_STARTUP};

/// Complete CLI configuration.
///
/// Combines all configuration groups for the examforge server:
/// - [`ServerConfig`]: Network binding and TLS
/// - [`MiddlewareConfig`]: HTTP middleware (CORS, body limit, recovery)
/// - [`GenerationConfig`]: Generation mode and form defaults
/// - [`MiniMaxConfig`]: MiniMax chat-completion client
/// - `MockConfig`: Canned completion responses (feature-gated)
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "examforge")]
#[command(about = "Exam paper analysis and exercise generation server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, body limit, timeouts).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Exercise generation configuration.
    #[clap(flatten)]
    pub generation: GenerationConfig,

    /// MiniMax configuration for remote generation.
    #[clap(flatten)]
    pub minimax: MiniMaxConfig,

    /// Mock configuration for remote generation without credentials.
    #[cfg(feature = "mock")]
    #[clap(flatten)]
    pub mock: examforge_core::mock::MockConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is loaded before clap parses arguments, so its values
    /// act as environment defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Logs build information at debug level.
    fn log_build_info() {
        tracing::debug!(
            target: TRACING_TARGET_SERVER_STARTUP,
            version = env!("CARGO_PKG_VERSION"),
            pid = process::id(),
            arch = std::env::consts::ARCH,
            os = std::env::consts::OS,
            features = ?Self::enabled_features(),
            "Build information"
        );
    }

    /// Validates all configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the server or middleware settings are out of
    /// range, or if remote mode is selected without MiniMax credentials.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.middleware
            .validate()
            .context("invalid middleware configuration")?;

        if self.generation.mode == GenerationMode::Remote && !self.uses_mock() {
            self.minimax
                .validate()
                .context("invalid MiniMax configuration")?;
            self.minimax
                .credentials()
                .context("remote generation requires MiniMax credentials")?;
        }

        Ok(())
    }

    /// Returns `true` if remote completions are answered by the mock provider.
    #[cfg(feature = "mock")]
    pub fn uses_mock(&self) -> bool {
        self.mock.mock_response.is_some() || self.mock.fail
    }

    /// Always `false` without the mock feature.
    #[cfg(not(feature = "mock"))]
    pub fn uses_mock(&self) -> bool {
        false
    }

    /// Logs configuration at info level (no sensitive information).
    pub fn log(&self) {
        Self::log_build_info();
        self.server.log();
        self.middleware.log();
        self.generation.log();

        if self.generation.mode == GenerationMode::Remote {
            tracing::info!(
                target: TRACING_TARGET_CONFIG,
                base_url = %self.minimax.base_url,
                model = %self.minimax.model,
                timeout_secs = self.minimax.timeout_secs,
                has_credentials = self.minimax.has_credentials(),
                mock = self.uses_mock(),
                "MiniMax configuration"
            );
        }
    }

    /// Returns a list of enabled compile-time features.
    fn enabled_features() -> Vec<&'static str> {
        [
            cfg!(feature = "tls").then_some("tls"),
            cfg!(feature = "dotenv").then_some("dotenv"),
            cfg!(feature = "mock").then_some("mock"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
