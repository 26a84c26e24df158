//! Service health handlers.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use examforge_core::ExerciseGenerationService;

use super::response::MonitorStatus;
use crate::extract::Json;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "examforge_server::handler::monitors";

/// Reports that the service is up and which generation mode it serves.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(generation): State<ExerciseGenerationService>,
) -> Json<MonitorStatus> {
    let status = MonitorStatus::healthy(generation.mode());

    tracing::debug!(
        target: TRACING_TARGET,
        mode = %status.mode,
        "Health status requested"
    );

    Json(status)
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use examforge_core::mock::MockCompletionProvider;
    use serde_json::Value;

    use crate::handler::test::{create_test_server, create_test_server_with_service};

    #[tokio::test]
    async fn health_reports_local_mode() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["isHealthy"], true);
        assert_eq!(body["mode"], "local");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_remote_mode() -> anyhow::Result<()> {
        let service = MockCompletionProvider::default().into_service();
        let server = create_test_server_with_service(service)?;

        let response = server.get("/health").await;
        assert_eq!(response.json::<Value>()["mode"], "remote");
        Ok(())
    }
}
