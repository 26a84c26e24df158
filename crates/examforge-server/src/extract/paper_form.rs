//! Multipart form carrying an exam paper and generation options.

use axum::extract::{FromRequest, Request};
use examforge_core::{InclusionFlags, RawDocument};

use super::Multipart;
use crate::handler::{Error, ErrorKind};

/// Tracing target for paper uploads.
const TRACING_TARGET: &str = "examforge_server::extract::paper_form";

/// Name of the form field holding the PDF.
pub const FILE_FIELD: &str = "file";

const TOPIC_FIELD: &str = "topic";
const REQUIREMENTS_FIELD: &str = "requirements";

/// Content types accepted for the uploaded paper.
const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["application/pdf", "application/octet-stream"];

/// An uploaded paper with optional generation options.
///
/// Form fields:
/// - `file`: the PDF, required
/// - `topic`: passage or section to generate for
/// - `requirements`: writing task requirements
/// - `include_*`: category switches, `true`/`false`, `1`/`0`, `on`/`off`
///
/// Blank `topic` and `requirements` count as absent. Unknown fields are
/// ignored.
#[derive(Debug, Clone)]
pub struct PaperForm {
    /// The uploaded PDF.
    pub document: RawDocument,
    /// Selected topic, if sent.
    pub topic: Option<String>,
    /// Writing requirements, if sent.
    pub requirements: Option<String>,
    /// Category switches; categories not sent keep their defaults.
    pub flags: InclusionFlags,
}

impl<S> FromRequest<S> for PaperForm
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Multipart(mut multipart) = Multipart::from_request(req, state).await?;

        let mut document = None;
        let mut topic = None;
        let mut requirements = None;
        let mut flags = InclusionFlags::default();

        while let Some(field) = multipart.next_field().await.map_err(Error::from)? {
            let Some(name) = field.name().map(str::to_owned) else {
                tracing::debug!(target: TRACING_TARGET, "Skipping unnamed field");
                continue;
            };

            if name == FILE_FIELD {
                let content_type = field.content_type().map(str::to_owned);
                validate_content_type(content_type.as_deref())?;

                let file_name = field.file_name().map(str::to_owned);
                let content = field.bytes().await.map_err(Error::from)?;

                tracing::debug!(
                    target: TRACING_TARGET,
                    file_name = ?file_name,
                    content_type = ?content_type,
                    size = content.len(),
                    "Received paper upload"
                );

                let raw = RawDocument::new(content);
                document = Some(match file_name {
                    Some(file_name) => raw.with_file_name(file_name),
                    None => raw,
                });
                continue;
            }

            let value = field.text().await.map_err(Error::from)?;
            match name.as_str() {
                TOPIC_FIELD => topic = non_blank(value),
                REQUIREMENTS_FIELD => requirements = non_blank(value),
                _ if InclusionFlags::is_field_name(&name) => {
                    flags.set_by_name(&name, parse_flag(&name, &value)?);
                }
                _ => {
                    tracing::debug!(
                        target: TRACING_TARGET,
                        field = %name,
                        "Ignoring unknown form field"
                    );
                }
            }
        }

        let Some(document) = document else {
            return Err(ErrorKind::BadRequest
                .with_message("Missing file field")
                .with_resource(FILE_FIELD)
                .with_context("Upload the exam paper in a multipart field named 'file'"));
        };

        Ok(Self {
            document,
            topic,
            requirements,
            flags,
        })
    }
}

fn validate_content_type(content_type: Option<&str>) -> Result<(), Error<'static>> {
    let Some(content_type) = content_type else {
        return Ok(());
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if ACCEPTED_CONTENT_TYPES.contains(&essence.as_str()) {
        return Ok(());
    }

    Err(ErrorKind::BadRequest
        .with_message("Unsupported file type")
        .with_resource(FILE_FIELD)
        .with_context(format!(
            "Expected application/pdf or application/octet-stream, got '{content_type}'"
        )))
}

/// Parses the value of a category switch named `name`.
fn parse_flag(name: &str, value: &str) -> Result<bool, Error<'static>> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        other => Err(ErrorKind::BadRequest
            .with_message("Invalid inclusion flag")
            .with_resource(name.to_owned())
            .with_context(format!("Expected true or false, got '{other}'"))),
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_and_octet_stream_are_accepted() {
        assert!(validate_content_type(Some("application/pdf")).is_ok());
        assert!(validate_content_type(Some("Application/PDF; name=a.pdf")).is_ok());
        assert!(validate_content_type(Some("application/octet-stream")).is_ok());
        assert!(validate_content_type(None).is_ok());
    }

    #[test]
    fn other_content_types_are_rejected() {
        let err = validate_content_type(Some("image/png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn flag_values() {
        assert!(parse_flag("include_vocab", "on").unwrap());
        assert!(!parse_flag("include_vocab", "0").unwrap());
        assert!(parse_flag("include_vocab", "maybe").is_err());
    }

    #[test]
    fn only_known_switches_are_parsed() {
        assert!(InclusionFlags::is_field_name("include_vocab"));
        assert!(!InclusionFlags::is_field_name("include_notes"));
        assert!(!InclusionFlags::is_field_name("comment"));
    }

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(non_blank("  ".to_owned()), None);
        assert_eq!(non_blank(" B篇 ".to_owned()), Some("B篇".to_owned()));
    }
}
