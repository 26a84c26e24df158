//! Exercise generation configuration.

use clap::Args;
use examforge_core::GenerationMode;
use examforge_core::exercise::DEFAULT_REQUIREMENTS;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Selects how exercises are produced and the defaults applied to uploads.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct GenerationConfig {
    /// Generation mode: `local` heuristics or `remote` MiniMax completions.
    #[arg(
        long = "generation-mode",
        env = "GENERATION_MODE",
        value_enum,
        default_value_t = GenerationMode::Local
    )]
    #[serde(default)]
    pub mode: GenerationMode,

    /// Writing requirements used when an upload does not provide any.
    #[arg(long, env = "DEFAULT_REQUIREMENTS", default_value = DEFAULT_REQUIREMENTS)]
    #[serde(default = "default_requirements")]
    pub default_requirements: String,
}

fn default_requirements() -> String {
    DEFAULT_REQUIREMENTS.to_owned()
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            default_requirements: default_requirements(),
        }
    }
}

impl GenerationConfig {
    /// Logs generation configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            mode = %self.mode,
            default_requirements = %self.default_requirements,
            "Generation configuration"
        );
    }
}
