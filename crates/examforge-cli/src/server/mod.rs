//! HTTP/HTTPS server startup and lifecycle management.
//!
//! Protocol selection follows the configuration: with the `tls` feature and
//! both certificate paths set the server speaks HTTPS, otherwise plain HTTP.

mod error;
mod http_server;
#[cfg(feature = "tls")]
mod https_server;
mod shutdown;

use std::time::Instant;

use axum::Router;
pub use error::{ServerError, ServerResult};
use http_server::serve_http;
#[cfg(feature = "tls")]
use https_server::serve_https;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Serves `app` until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if:
/// - TLS certificates cannot be loaded (HTTPS mode)
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    if config.host.is_unspecified() {
        tracing::warn!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %config.server_addr(),
            "Uploads are accepted on every interface; restrict access with a firewall"
        );
    }

    let started = Instant::now();
    let result = dispatch(app, &config).await;
    let uptime_secs = started.elapsed().as_secs();

    match &result {
        Ok(()) => tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            uptime_secs,
            "Shutdown completed"
        ),
        Err(err) => {
            tracing::error!(
                target: TRACING_TARGET_SERVER_SHUTDOWN,
                error = %err,
                code = err.error_code(),
                recoverable = err.is_recoverable(),
                uptime_secs,
                "Server failed"
            );

            if let Some(suggestion) = err.suggestion() {
                tracing::info!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    suggestion,
                    "Recovery suggestion"
                );
            }
        }
    }

    result
}

#[cfg(feature = "tls")]
async fn dispatch(app: Router, config: &ServerConfig) -> ServerResult<()> {
    match config.tls.paths() {
        Some((cert_path, key_path)) => serve_https(app, config, cert_path, key_path).await,
        None => serve_http(app, config).await,
    }
}

#[cfg(not(feature = "tls"))]
async fn dispatch(app: Router, config: &ServerConfig) -> ServerResult<()> {
    serve_http(app, config).await
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, TcpListener};

    use super::*;

    #[tokio::test]
    async fn occupied_port_is_a_bind_error() -> anyhow::Result<()> {
        let occupied = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))?;
        let config = ServerConfig {
            port: occupied.local_addr()?.port(),
            ..ServerConfig::default()
        };

        let err = serve(Router::new(), config.clone()).await.unwrap_err();
        let ServerError::BindError { address, .. } = &err else {
            panic!("expected a bind error, got {err}");
        };
        assert_eq!(*address, config.server_addr());
        assert_eq!(err.error_code(), "E001");
        Ok(())
    }
}
