//! Recovery middleware for panics and slow requests.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::{Request, State};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::{IntoResponse, Response};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::handler::{Error, ErrorKind};

/// Tracing target for timed-out requests.
const TRACING_TARGET_TIMEOUT: &str = "examforge_server::recovery::timeout";

/// Tracing target for panic recovery.
const TRACING_TARGET_PANIC: &str = "examforge_server::recovery::panic";

type Panic = Box<dyn Any + Send + 'static>;

/// Configuration for recovery middleware behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct RecoveryConfig {
    /// Seconds a request may run before it is answered with a 500.
    ///
    /// Paths listed in `untimed_paths` are not bounded.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "REQUEST_TIMEOUT", default_value = "30")
    )]
    pub request_timeout: u64,

    /// Exact request paths that run without the request timeout.
    #[cfg_attr(feature = "config", arg(skip))]
    #[serde(default)]
    pub untimed_paths: Vec<String>,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self::with_timeout_secs(30)
    }
}

impl RecoveryConfig {
    /// Creates a new configuration with the specified request timeout in seconds.
    pub fn with_timeout_secs(secs: u64) -> Self {
        Self {
            request_timeout: secs,
            untimed_paths: Vec::new(),
        }
    }

    /// Exempts `paths` from the request timeout.
    ///
    /// Routes that wait on a remote model should be listed here so the
    /// model client's own timeout decides how long they may take.
    pub fn without_timeout_for<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.untimed_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Returns the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Returns `true` if requests to `path` are bounded by the timeout.
    pub fn is_timed(&self, path: &str) -> bool {
        !self.untimed_paths.iter().any(|untimed| untimed == path)
    }
}

/// Extension trait for `axum::`[`Router`] to apply recovery middleware.
pub trait RouterRecoveryExt<S> {
    /// Layers recovery middleware with the provided configuration.
    ///
    /// Handler panics and timed requests that outlive the timeout are
    /// answered with a 500 JSON error.
    fn with_recovery(self, config: &RecoveryConfig) -> Self;

    /// Layers recovery middleware with the default 30-second timeout.
    fn with_default_recovery(self) -> Self;
}

impl<S> RouterRecoveryExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_recovery(self, config: &RecoveryConfig) -> Self {
        let middlewares = ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(catch_panic))
            .layer(from_fn_with_state(Arc::new(config.clone()), enforce_timeout));

        self.layer(middlewares)
    }

    fn with_default_recovery(self) -> Self {
        self.with_recovery(&RecoveryConfig::default())
    }
}

async fn enforce_timeout(
    State(config): State<Arc<RecoveryConfig>>,
    request: Request,
    next: Next,
) -> Response {
    if !config.is_timed(request.uri().path()) {
        return next.run(request).await;
    }

    let path = request.uri().path().to_owned();
    let timeout = config.request_timeout();
    match tokio::time::timeout(timeout, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!(
                target: TRACING_TARGET_TIMEOUT,
                path = %path,
                timeout_secs = timeout.as_secs(),
                "request timeout exceeded"
            );

            ErrorKind::InternalServerError
                .with_context(format!(
                    "The request took longer than {}s and was terminated",
                    timeout.as_secs()
                ))
                .into_response()
        }
    }
}

fn catch_panic(err: Panic) -> Response {
    if let Some(error) = err.downcast_ref::<Error<'static>>() {
        tracing::error!(
            target: TRACING_TARGET_PANIC,
            error = %error,
            "service panic"
        );
        return error.clone().into_response();
    }

    let panic = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic type");

    tracing::error!(
        target: TRACING_TARGET_PANIC,
        panic = %panic,
        "service panic"
    );

    ErrorKind::InternalServerError
        .with_context("The handler panicked while processing the request")
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum_test::TestServer;
    use serde_json::Value;

    use super::*;

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(2)).await;
        "done"
    }

    fn slow_app(config: &RecoveryConfig) -> Router {
        Router::new()
            .route("/slow", get(slow))
            .route("/remote", get(slow))
            .with_recovery(config)
    }

    #[tokio::test]
    async fn slow_requests_time_out() -> anyhow::Result<()> {
        let server = TestServer::new(slow_app(&RecoveryConfig::with_timeout_secs(1)))?;

        let response = server.get("/slow").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["name"], "internal_server_error");
        assert_eq!(
            body["message"],
            ErrorKind::InternalServerError.response().message.into_owned()
        );
        assert!(
            body["context"]
                .as_str()
                .unwrap_or_default()
                .contains("longer than 1s")
        );
        Ok(())
    }

    #[tokio::test]
    async fn untimed_paths_run_to_completion() -> anyhow::Result<()> {
        let config = RecoveryConfig::with_timeout_secs(1).without_timeout_for(["/remote"]);
        let server = TestServer::new(slow_app(&config))?;

        let response = server.get("/remote").await;
        response.assert_status_ok();
        response.assert_text("done");

        server
            .get("/slow")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        Ok(())
    }

    #[test]
    fn only_exact_paths_are_untimed() {
        let config = RecoveryConfig::default().without_timeout_for(["/exercises/generate"]);
        assert!(!config.is_timed("/exercises/generate"));
        assert!(config.is_timed("/exercises/generate/extra"));
        assert!(config.is_timed("/exercises/export"));
    }

    #[tokio::test]
    async fn panics_become_json_errors() -> anyhow::Result<()> {
        async fn boom() -> &'static str {
            panic!("generator exploded")
        }

        let app = Router::new().route("/boom", get(boom)).with_default_recovery();
        let server = TestServer::new(app)?;

        let response = server.get("/boom").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert_eq!(body["name"], "internal_server_error");
        assert_eq!(
            body["message"],
            ErrorKind::InternalServerError.response().message.into_owned()
        );
        Ok(())
    }
}
