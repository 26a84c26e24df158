//! Monitor response types.

use examforge_core::GenerationMode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Service status response.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStatus {
    /// Whether the service accepts requests.
    pub is_healthy: bool,
    /// Generation mode the service was started with.
    pub mode: GenerationMode,
    /// Application version.
    pub version: String,
    /// Timestamp when this status was generated.
    pub checked_at: Timestamp,
}

impl MonitorStatus {
    /// Creates a healthy status for the given mode.
    pub fn healthy(mode: GenerationMode) -> Self {
        Self {
            is_healthy: true,
            mode,
            version: env!("CARGO_PKG_VERSION").to_owned(),
            checked_at: Timestamp::now(),
        }
    }
}
