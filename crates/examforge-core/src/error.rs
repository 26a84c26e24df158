//! Common error type definitions.

use strum::{AsRefStr, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with our custom Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur in the examforge pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// The uploaded document is not a readable PDF.
    Parse,
    /// The hosted language model could not be reached or answered badly.
    RemoteGeneration,
    /// The exporter was handed a payload of an unexpected shape.
    PayloadShape,
    /// Input validation failed.
    InvalidInput,
    /// Configuration error.
    Configuration,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// Returns the error kind as a snake_case string.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured error type for examforge operations.
#[derive(Debug, Error)]
#[error("{kind}{}", .message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new parse error.
    pub fn parse() -> Self {
        Self::new(ErrorKind::Parse)
    }

    /// Creates a new remote generation error.
    pub fn remote_generation() -> Self {
        Self::new(ErrorKind::RemoteGeneration)
    }

    /// Creates a new payload shape error.
    pub fn payload_shape() -> Self {
        Self::new(ErrorKind::PayloadShape)
    }

    /// Creates a new invalid input error.
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Creates a new internal error.
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }

    /// Returns the message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::payload_shape()
            .with_message("payload does not match the expected structure")
            .with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::parse().with_message("not a pdf");
        assert_eq!(err.to_string(), "parse: not a pdf");
        assert_eq!(err.kind_str(), "parse");
    }

    #[test]
    fn display_without_message() {
        let err = Error::remote_generation();
        assert_eq!(err.to_string(), "remote_generation");
    }

    #[test]
    fn json_errors_are_shape_errors() {
        let json_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = Error::from(json_err);
        assert_eq!(err.kind(), ErrorKind::PayloadShape);
        assert!(std::error::Error::source(&err).is_some());
    }
}
