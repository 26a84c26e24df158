//! HTTPS server startup using rustls.

use std::io;
use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;

use crate::TRACING_TARGET_SERVER_STARTUP;
use crate::config::ServerConfig;
use crate::server::{ServerError, ServerResult, shutdown_signal};

/// Starts an HTTPS server; shutdown drains connections for up to the
/// configured timeout.
///
/// # Errors
///
/// Returns an error if the PEM files cannot be read or parsed, or the
/// server fails while running.
pub async fn serve_https(
    app: Router,
    config: &ServerConfig,
    cert_path: &Path,
    key_path: &Path,
) -> ServerResult<()> {
    let server_addr = config.server_addr();
    let shutdown_timeout = config.shutdown_timeout();
    let tls_config = load_rustls_config(cert_path, key_path).await?;

    let handle = Handle::new();
    let drain = handle.clone();
    tokio::spawn(async move {
        shutdown_signal(shutdown_timeout).await;
        drain.graceful_shutdown(Some(shutdown_timeout));
    });

    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        addr = %server_addr,
        cert_path = %cert_path.display(),
        "HTTPS server starting"
    );

    axum_server::bind_rustls(server_addr, tls_config)
        .handle(handle)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .map_err(|err| match err.kind() {
            io::ErrorKind::AddrInUse
            | io::ErrorKind::AddrNotAvailable
            | io::ErrorKind::PermissionDenied => ServerError::bind_error(server_addr, err),
            _ => ServerError::Runtime(err),
        })
}

async fn load_rustls_config(cert_path: &Path, key_path: &Path) -> ServerResult<RustlsConfig> {
    let cert = read_pem(cert_path, "certificate").await?;
    let key = read_pem(key_path, "private key").await?;

    RustlsConfig::from_pem(cert, key).await.map_err(|err| {
        ServerError::TlsCertificate(format!(
            "{} and {} do not form a usable key pair: {err}",
            cert_path.display(),
            key_path.display()
        ))
    })
}

async fn read_pem(path: &Path, what: &str) -> ServerResult<Vec<u8>> {
    let pem = tokio::fs::read(path).await.map_err(|err| {
        ServerError::TlsCertificate(format!("cannot read {what} {}: {err}", path.display()))
    })?;

    if pem.is_empty() {
        return Err(ServerError::TlsCertificate(format!(
            "{what} {} is empty",
            path.display()
        )));
    }

    Ok(pem)
}
