//! Exam paper upload and analysis handlers.

use axum::Router;
use axum::routing::post;
use examforge_core::{ExtractedText, RawDocument, extract_text};

use super::response::PaperAnalysis;
use crate::extract::{Json, PaperForm};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for paper operations.
const TRACING_TARGET: &str = "examforge_server::handler::papers";

/// Extracts the text of an uploaded paper and summarizes it.
#[tracing::instrument(skip_all, fields(file_name = ?form.document.file_name()))]
async fn analyze_paper(form: PaperForm) -> Result<Json<PaperAnalysis>> {
    let file_name = form.document.file_name().map(str::to_owned);
    let text = extract_paper_text(form.document).await?;
    let analysis = PaperAnalysis::new(file_name, &text);

    tracing::info!(
        target: TRACING_TARGET,
        page_count = analysis.page_count,
        character_count = analysis.character_count,
        question_types = ?analysis.question_types.labels(),
        articles = analysis.articles.len(),
        "Paper analyzed"
    );

    Ok(Json(analysis))
}

/// Parses the PDF on the blocking pool.
pub(super) async fn extract_paper_text(document: RawDocument) -> Result<ExtractedText> {
    let size = document.len();
    let text = tokio::task::spawn_blocking(move || extract_text(&document))
        .await
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET,
                error = %err,
                "Text extraction task failed"
            );
            ErrorKind::InternalServerError.with_message("Text extraction failed")
        })??;

    tracing::debug!(
        target: TRACING_TARGET,
        size,
        page_count = text.page_count(),
        "Extracted paper text"
    );

    Ok(text)
}

/// Returns a [`Router`] with all paper routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/papers/analyze", post(analyze_paper))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use serde_json::Value;

    use crate::handler::test::{create_test_server, pdf_part, pdf_with_pages};

    #[tokio::test]
    async fn analyze_reports_counts_and_question_types() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let pdf = pdf_with_pages(&["Reading Comprehension", "Listening test"]);
        let form = MultipartForm::new().add_part("file", pdf_part(pdf, "paper.pdf"));

        let response = server.post("/papers/analyze").multipart(form).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["fileName"], "paper.pdf");
        assert_eq!(body["pageCount"], 2);
        assert!(body["characterCount"].as_u64().unwrap_or_default() > 0);
        assert_eq!(body["questionTypes"], serde_json::json!(["阅读理解", "听力"]));
        Ok(())
    }

    #[tokio::test]
    async fn non_pdf_upload_is_a_parse_error() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"hello world".to_vec())
                .file_name("paper.pdf")
                .mime_type("application/pdf"),
        );

        let response = server.post("/papers/analyze").multipart(form).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = response.json();
        assert_eq!(body["name"], "parse_error");
        assert_eq!(body["resource"], "paper");
        Ok(())
    }

    #[tokio::test]
    async fn wrong_content_type_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let form = MultipartForm::new().add_part(
            "file",
            Part::bytes(b"GIF89a".to_vec())
                .file_name("paper.gif")
                .mime_type("image/gif"),
        );

        let response = server.post("/papers/analyze").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["name"], "bad_request");
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let form = MultipartForm::new().add_text("topic", "B篇");

        let response = server.post("/papers/analyze").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["resource"], "file");
        Ok(())
    }
}
