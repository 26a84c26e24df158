//! Error types for examforge-minimax.

use thiserror::Error;

/// Error type for the examforge-minimax library.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("MiniMax API returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The body carried a non-zero `base_resp.status_code`.
    #[error("MiniMax rejected the request ({code}): {message}")]
    Rejected { code: i64, message: String },

    /// No `choices[0].message.content` in the response.
    #[error("MiniMax response contained no message content")]
    EmptyResponse,

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an API status error.
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

impl From<Error> for examforge_core::Error {
    fn from(err: Error) -> Self {
        let base = match &err {
            Error::Config(_) => examforge_core::Error::configuration(),
            _ => examforge_core::Error::remote_generation(),
        };
        base.with_message(err.to_string()).with_source(err)
    }
}

/// Result type alias for examforge-minimax operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use examforge_core::ErrorKind;

    use super::*;

    #[test]
    fn api_failures_become_remote_generation_errors() {
        let err: examforge_core::Error = Error::api_error(500, "boom").into();
        assert_eq!(err.kind(), ErrorKind::RemoteGeneration);
        assert!(err.message().unwrap().contains("500"));
    }

    #[test]
    fn config_failures_become_configuration_errors() {
        let err: examforge_core::Error = Error::invalid_config("missing key").into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
