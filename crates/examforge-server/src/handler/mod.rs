//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust
//! use examforge_core::{ExerciseGenerationService, LocalExerciseProvider};
//! use examforge_server::handler::routes;
//! use examforge_server::service::ServiceState;
//!
//! let generation = ExerciseGenerationService::new(LocalExerciseProvider::new());
//! let state = ServiceState::new(generation);
//! let router: axum::Router = routes().with_state(state);
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod exercises;
mod monitors;
mod papers;
mod request;
mod response;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::exercises::GENERATION_ROUTES;
pub use crate::handler::request::ExportExercises;
pub use crate::handler::response::{
    Attachment, ErrorResponse, GeneratedExercisesResponse, MonitorStatus, PaperAnalysis,
};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .merge(monitors::routes())
        .merge(papers::routes())
        .merge(exercises::routes())
        .fallback(handler)
}

#[cfg(test)]
pub(crate) mod test {
    use axum_test::TestServer;
    use axum_test::multipart::Part;
    use examforge_core::{ExerciseGenerationService, LocalExerciseProvider};
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    use crate::handler::routes;
    use crate::service::ServiceState;

    /// Returns a new [`TestServer`] backed by the given generation service.
    pub fn create_test_server_with_service(
        generation: ExerciseGenerationService,
    ) -> anyhow::Result<TestServer> {
        let app = routes().with_state(ServiceState::new(generation));
        let server = TestServer::new(app)?;
        Ok(server)
    }

    /// Returns a new [`TestServer`] with local generation.
    pub fn create_test_server() -> anyhow::Result<TestServer> {
        create_test_server_with_service(ExerciseGenerationService::new(
            LocalExerciseProvider::new(),
        ))
    }

    /// Returns a PDF upload part.
    pub fn pdf_part(bytes: Vec<u8>, file_name: &str) -> Part {
        Part::bytes(bytes)
            .file_name(file_name)
            .mime_type("application/pdf")
    }

    /// Builds a PDF with one line of text per page.
    pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let kids: Vec<Object> = pages
            .iter()
            .map(|text| {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![72.into(), 720.into()]),
                        Operation::new("Tj", vec![Object::string_literal(*text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                let content_id =
                    doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
                doc.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "Contents" => content_id,
                    "Resources" => resources_id,
                })
                .into()
            })
            .collect();

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[tokio::test]
    async fn unknown_routes_are_not_found() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/missing").await;
        response.assert_status_not_found();
        assert_eq!(response.json::<serde_json::Value>()["name"], "not_found");
        Ok(())
    }
}
