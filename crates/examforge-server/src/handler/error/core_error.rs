//! Conversion from [`examforge_core::Error`] to HTTP errors.

use examforge_core::ErrorKind as CoreErrorKind;

use super::http_error::{Error as HttpError, ErrorKind};

/// Tracing target for core error conversions.
const TRACING_TARGET: &str = "examforge_server::handler::core";

impl From<examforge_core::Error> for HttpError<'static> {
    fn from(error: examforge_core::Error) -> Self {
        match error.kind() {
            CoreErrorKind::Parse | CoreErrorKind::PayloadShape | CoreErrorKind::InvalidInput => {
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = error.kind_str(),
                    "Request rejected"
                );
            }
            CoreErrorKind::RemoteGeneration => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    "Remote generation failed"
                );
            }
            CoreErrorKind::Configuration | CoreErrorKind::Internal => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %error,
                    error_kind = error.kind_str(),
                    "Internal failure"
                );
            }
        }

        let message = error.message().unwrap_or_default().to_owned();

        match error.kind() {
            CoreErrorKind::Parse => ErrorKind::ParseError
                .with_resource("paper")
                .with_context(message),
            CoreErrorKind::RemoteGeneration => {
                ErrorKind::RemoteGeneration.with_context(message)
            }
            CoreErrorKind::PayloadShape => ErrorKind::PayloadShape
                .with_resource("exercises")
                .with_context(message),
            CoreErrorKind::InvalidInput => ErrorKind::BadRequest.with_context(message),
            CoreErrorKind::Configuration | CoreErrorKind::Internal => {
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}
