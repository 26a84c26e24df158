//! Generation service construction.

use anyhow::Context;
use examforge_core::{
    ExerciseGenerationService, GenerationMode, LocalExerciseProvider, RemoteExerciseProvider,
};
use examforge_minimax::MiniMaxClient;

use super::Cli;
use crate::TRACING_TARGET_CONFIG;

/// Creates the exercise generation service selected by the CLI configuration.
///
/// # Errors
///
/// Returns an error if remote mode is selected and the MiniMax client cannot
/// be initialized.
pub fn create_generation_service(cli: &Cli) -> anyhow::Result<ExerciseGenerationService> {
    let service = match cli.generation.mode {
        GenerationMode::Local => ExerciseGenerationService::new(LocalExerciseProvider::new()),
        GenerationMode::Remote => create_remote_service(cli)?,
    };

    tracing::info!(
        target: TRACING_TARGET_CONFIG,
        mode = %service.mode(),
        "Generation service created"
    );

    Ok(service)
}

#[cfg(feature = "mock")]
fn create_remote_service(cli: &Cli) -> anyhow::Result<ExerciseGenerationService> {
    if cli.uses_mock() {
        tracing::warn!(
            target: TRACING_TARGET_CONFIG,
            "Remote generation is served by the mock provider"
        );
        return Ok(cli.mock.clone().into_service());
    }

    create_minimax_service(cli)
}

#[cfg(not(feature = "mock"))]
fn create_remote_service(cli: &Cli) -> anyhow::Result<ExerciseGenerationService> {
    create_minimax_service(cli)
}

fn create_minimax_service(cli: &Cli) -> anyhow::Result<ExerciseGenerationService> {
    let client = MiniMaxClient::from_config(cli.minimax.clone())
        .context("failed to create MiniMax client")?;
    Ok(ExerciseGenerationService::new(RemoteExerciseProvider::new(client)))
}
