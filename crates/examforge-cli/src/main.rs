#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use examforge_core::GenerationMode;
use examforge_server::handler::{GENERATION_ROUTES, routes};
use examforge_server::middleware::{
    RecoveryConfig, RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt,
};
use examforge_server::service::{GenerationDefaults, ServiceState};

use crate::config::{Cli, MiddlewareConfig, create_generation_service};

// Tracing target constants
pub const TRACING_TARGET_SERVER_STARTUP: &str = "examforge_cli::server::startup";
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "examforge_cli::server::shutdown";
pub const TRACING_TARGET_CONFIG: &str = "examforge_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();
    Cli::init_tracing();

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting examforge server"
    );

    cli.validate()?;
    cli.log();

    let generation =
        create_generation_service(&cli).context("failed to create generation service")?;
    let defaults = GenerationDefaults::default()
        .with_requirements(cli.generation.default_requirements.clone());
    let state = ServiceState::new(generation).with_defaults(defaults);

    let recovery = recovery_for(cli.generation.mode, &cli.middleware.recovery);
    let router = create_router(state, &cli.middleware, &recovery);
    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS, body limits, security headers
/// 4. Routes (innermost) - actual request handlers
fn create_router(
    state: ServiceState,
    middleware: &MiddlewareConfig,
    recovery: &RecoveryConfig,
) -> Router {
    routes()
        .with_state(state)
        .with_security(&middleware.cors, &middleware.body_limit)
        .with_observability()
        .with_recovery(recovery)
}

/// Remote generation is bounded by the MiniMax client timeout instead of the
/// request timeout.
fn recovery_for(mode: GenerationMode, recovery: &RecoveryConfig) -> RecoveryConfig {
    match mode {
        GenerationMode::Local => recovery.clone(),
        GenerationMode::Remote => recovery.clone().without_timeout_for(GENERATION_ROUTES),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_mode_exempts_generation_routes() {
        let base = RecoveryConfig::with_timeout_secs(30);

        let local = recovery_for(GenerationMode::Local, &base);
        assert!(local.is_timed("/exercises/generate"));

        let remote = recovery_for(GenerationMode::Remote, &base);
        assert!(!remote.is_timed("/exercises/generate"));
        assert!(!remote.is_timed("/exercises/download"));
        assert!(remote.is_timed("/exercises/export"));
        assert!(remote.is_timed("/papers/analyze"));
    }
}
