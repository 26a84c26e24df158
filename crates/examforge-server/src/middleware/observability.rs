//! Request tracing with unique request IDs.

use axum::Router;
use axum::http::header::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Header carrying the request ID.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Extension trait for `axum::`[`Router`] to apply observability middleware.
pub trait RouterObservabilityExt<S> {
    /// Layers observability middleware for request tracing and logging.
    ///
    /// Generates a request ID for requests that have none, opens a tracing
    /// span per request and copies the ID onto the response.
    fn with_observability(self) -> Self;
}

impl<S> RouterObservabilityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_observability(self) -> Self {
        self.layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() -> anyhow::Result<()> {
        let app = Router::new().route("/", get(|| async { "ok" })).with_observability();
        let server = TestServer::new(app)?;

        let response = server.get("/").await;
        let id = response.header(REQUEST_ID_HEADER);
        assert!(!id.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn client_request_id_is_kept() -> anyhow::Result<()> {
        let app = Router::new().route("/", get(|| async { "ok" })).with_observability();
        let server = TestServer::new(app)?;

        let response = server
            .get("/")
            .add_header(
                HeaderName::from_static(REQUEST_ID_HEADER),
                HeaderValue::from_static("paper-42"),
            )
            .await;
        assert_eq!(response.header(REQUEST_ID_HEADER), "paper-42");
        Ok(())
    }
}
