//! Listener configuration: bind address, shutdown grace period and TLS.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
#[cfg(feature = "tls")]
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::ensure;
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Ports below this need elevated privileges.
const MIN_PORT: u16 = 1024;

/// Upper bound for the shutdown grace period, in seconds.
const MAX_SHUTDOWN_TIMEOUT: u64 = 300;

/// Where and how the exam server listens.
///
/// ```bash
/// examforge --host 0.0.0.0 --port 8080
/// HOST=0.0.0.0 PORT=8080 examforge
/// ```
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct ServerConfig {
    /// Address to bind; `0.0.0.0` exposes the server on every interface.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    #[serde(default = "default_host")]
    pub host: IpAddr,

    /// Port to listen on (1024-65535).
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Seconds in-flight uploads may take to finish once shutdown starts (1-300).
    #[arg(long, env = "SHUTDOWN_TIMEOUT", default_value_t = 30)]
    pub shutdown_timeout: u64,

    /// Certificate and key for HTTPS.
    #[cfg(feature = "tls")]
    #[clap(flatten)]
    #[serde(default)]
    pub tls: TlsConfig,
}

/// PEM files for HTTPS; both or neither must be set.
#[cfg(feature = "tls")]
#[derive(Debug, Clone, Default, Args, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Certificate chain (PEM).
    #[arg(long = "tls-cert-path", env = "TLS_CERT_PATH")]
    pub cert_path: Option<PathBuf>,

    /// Private key (PEM).
    #[arg(long = "tls-key-path", env = "TLS_KEY_PATH")]
    pub key_path: Option<PathBuf>,
}

#[cfg(feature = "tls")]
impl TlsConfig {
    /// Returns the certificate and key paths when HTTPS is configured.
    pub fn paths(&self) -> Option<(&Path, &Path)> {
        Some((self.cert_path.as_deref()?, self.key_path.as_deref()?))
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.cert_path.is_some() == self.key_path.is_some(),
            "--tls-cert-path and --tls-key-path must be given together"
        );
        Ok(())
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

impl ServerConfig {
    /// Checks the port, the shutdown grace period and the TLS pairing.
    ///
    /// # Errors
    ///
    /// Returns the first setting that is out of range.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.port >= MIN_PORT,
            "port {} needs root privileges; pick one in {MIN_PORT}-65535",
            self.port
        );
        ensure!(
            (1..=MAX_SHUTDOWN_TIMEOUT).contains(&self.shutdown_timeout),
            "shutdown timeout must be 1-{MAX_SHUTDOWN_TIMEOUT} seconds, got {}",
            self.shutdown_timeout
        );

        #[cfg(feature = "tls")]
        self.tls.validate()?;

        Ok(())
    }

    /// Returns the socket address for server binding.
    #[must_use]
    pub const fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the graceful shutdown timeout as a `Duration`.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }

    /// URL scheme the server will answer on.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        #[cfg(feature = "tls")]
        if self.tls.paths().is_some() {
            return "https";
        }
        "http"
    }

    /// Logs server configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            url = %format_args!("{}://{}", self.scheme(), self.server_addr()),
            shutdown_timeout_secs = self.shutdown_timeout,
            "Server configuration"
        );
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: 3000,
            shutdown_timeout: 30,
            #[cfg(feature = "tls")]
            tls: TlsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_localhost_over_http() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server_addr(), "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.scheme(), "http");
    }

    #[test]
    fn privileged_port_is_rejected_with_range() {
        let config = ServerConfig {
            port: 80,
            ..ServerConfig::default()
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("1024-65535"), "{message}");
    }

    #[test]
    fn shutdown_timeout_bounds() {
        for (secs, valid) in [(0, false), (1, true), (300, true), (301, false)] {
            let config = ServerConfig {
                shutdown_timeout: secs,
                ..ServerConfig::default()
            };
            assert_eq!(config.validate().is_ok(), valid, "{secs}s");
        }
    }

    #[cfg(feature = "tls")]
    #[test]
    fn tls_paths_come_in_pairs() {
        let mut config = ServerConfig::default();
        config.tls.cert_path = Some("cert.pem".into());
        assert!(config.validate().is_err());
        assert_eq!(config.scheme(), "http");

        config.tls.key_path = Some("key.pem".into());
        assert!(config.validate().is_ok());
        assert_eq!(config.scheme(), "https");
    }
}
