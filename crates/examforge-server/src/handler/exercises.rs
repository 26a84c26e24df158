//! Exercise generation, download and export handlers.

use axum::Router;
use axum::extract::State;
use axum::routing::post;
use examforge_core::export::{DOCX_CONTENT_TYPE, TEXT_CONTENT_TYPE};
use examforge_core::{
    ExerciseGenerationService, ExercisePayload, ExportDocument, GeneratedExercises,
    GenerationRequest, QuestionTypeSet, classify, docx_file_name, text_file_name,
};

use super::papers::extract_paper_text;
use super::request::ExportExercises;
use super::response::{Attachment, GeneratedExercisesResponse};
use crate::extract::{Json, PaperForm};
use crate::handler::Result;
use crate::service::{GenerationDefaults, ServiceState};

/// Tracing target for exercise operations.
const TRACING_TARGET: &str = "examforge_server::handler::exercises";

/// Routes whose latency is bound by the generation provider.
pub const GENERATION_ROUTES: [&str; 2] = ["/exercises/generate", "/exercises/download"];

/// Exercises generated for one upload.
struct Generated {
    request: GenerationRequest,
    uploaded_name: Option<String>,
    question_types: QuestionTypeSet,
    exercises: GeneratedExercises,
}

impl Generated {
    /// Suggested download name: the topic for documents, the uploaded file's
    /// stem for model output.
    fn file_name(&self) -> String {
        match self.exercises {
            GeneratedExercises::Structured(_) => docx_file_name(&self.request.topic),
            GeneratedExercises::FreeForm(_) => text_file_name(self.uploaded_name.as_deref()),
        }
    }

    fn into_attachment(self) -> Result<Attachment> {
        let file_name = self.file_name();
        match self.exercises {
            GeneratedExercises::Structured(payload) => {
                render_docx(&payload, &self.request.topic, file_name)
            }
            GeneratedExercises::FreeForm(text) => {
                Ok(Attachment::new(file_name, TEXT_CONTENT_TYPE, text.into_bytes()))
            }
        }
    }
}

async fn generate(
    generation: &ExerciseGenerationService,
    defaults: &GenerationDefaults,
    form: PaperForm,
) -> Result<Generated> {
    let uploaded_name = form.document.file_name().map(str::to_owned);
    let text = extract_paper_text(form.document).await?;
    let question_types = classify(text.as_str());

    let request = GenerationRequest::new(text.into_string())
        .with_topic(form.topic.unwrap_or_else(|| defaults.topic.clone()))
        .with_requirements(
            form.requirements.unwrap_or_else(|| defaults.requirements.clone()),
        )
        .with_flags(form.flags);

    let exercises = generation.generate(&request).await?;

    Ok(Generated {
        request,
        uploaded_name,
        question_types,
        exercises,
    })
}

fn render_docx(payload: &ExercisePayload, topic: &str, file_name: String) -> Result<Attachment> {
    let document = ExportDocument::from_payload(payload, topic)?;
    let bytes = document.to_docx()?;

    tracing::debug!(
        target: TRACING_TARGET,
        topic,
        sections = document.sections.len(),
        size = bytes.len(),
        "Rendered exercise document"
    );

    Ok(Attachment::new(file_name, DOCX_CONTENT_TYPE, bytes))
}

/// Generates exercises for an uploaded paper and returns them as JSON.
#[tracing::instrument(skip_all, fields(mode = %generation.mode()))]
async fn generate_exercises(
    State(generation): State<ExerciseGenerationService>,
    State(defaults): State<GenerationDefaults>,
    form: PaperForm,
) -> Result<Json<GeneratedExercisesResponse>> {
    let generated = generate(&generation, &defaults, form).await?;
    let file_name = generated.file_name();

    tracing::info!(
        target: TRACING_TARGET,
        request_id = %generated.request.request_id,
        topic = %generated.request.topic,
        file_name = %file_name,
        "Exercises generated"
    );

    Ok(Json(GeneratedExercisesResponse {
        request_id: generated.request.request_id,
        mode: generation.mode(),
        topic: generated.request.topic,
        file_name,
        question_types: generated.question_types,
        exercises: generated.exercises,
    }))
}

/// Generates exercises for an uploaded paper and returns them as a file.
#[tracing::instrument(skip_all, fields(mode = %generation.mode()))]
async fn download_exercises(
    State(generation): State<ExerciseGenerationService>,
    State(defaults): State<GenerationDefaults>,
    form: PaperForm,
) -> Result<Attachment> {
    let generated = generate(&generation, &defaults, form).await?;
    let request_id = generated.request.request_id;
    let attachment = generated.into_attachment()?;

    tracing::info!(
        target: TRACING_TARGET,
        request_id = %request_id,
        file_name = %attachment.file_name(),
        "Exercise download prepared"
    );

    Ok(attachment)
}

/// Renders previously generated structured exercises as a document.
#[tracing::instrument(skip_all, fields(topic = %request.topic))]
async fn export_exercises(Json(request): Json<ExportExercises>) -> Result<Attachment> {
    request.validate()?;

    let file_name = docx_file_name(&request.topic);
    let attachment = render_docx(&request.exercises, &request.topic, file_name)?;

    tracing::info!(
        target: TRACING_TARGET,
        file_name = %attachment.file_name(),
        categories = request.exercises.categories().len(),
        "Exercises exported"
    );

    Ok(attachment)
}

/// Returns a [`Router`] with all exercise routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route(GENERATION_ROUTES[0], post(generate_exercises))
        .route(GENERATION_ROUTES[1], post(download_exercises))
        .route("/exercises/export", post(export_exercises))
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::http::{StatusCode, header};
    use axum_test::TestServer;
    use axum_test::multipart::MultipartForm;
    use examforge_core::mock::MockCompletionProvider;
    use examforge_core::service::{CompletionProvider, CompletionRequest, CompletionResponse};
    use examforge_core::{Error, RemoteExerciseProvider};
    use serde_json::{Value, json};

    use super::*;
    use crate::handler::routes;
    use crate::handler::test::{
        create_test_server, create_test_server_with_service, pdf_part, pdf_with_pages,
    };
    use crate::middleware::{RecoveryConfig, RouterRecoveryExt};

    /// Model that outlives the request timeout before its client gives up.
    #[derive(Debug, Clone)]
    struct SlowModel;

    #[async_trait]
    impl CompletionProvider for SlowModel {
        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> examforge_core::Result<CompletionResponse> {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Err(Error::remote_generation().with_message("completion timed out"))
        }
    }

    const PAPER_TEXT: &str = "Reading Comprehension passage about oceans and rivers";

    fn paper_form() -> MultipartForm {
        let pdf = pdf_with_pages(&[PAPER_TEXT]);
        MultipartForm::new().add_part("file", pdf_part(pdf, "2024高考英语.pdf"))
    }

    fn document_xml(docx: &[u8]) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    #[tokio::test]
    async fn local_generation_returns_structured_exercises() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let form = paper_form()
            .add_text("topic", "B篇")
            .add_text("include_cloze", "false");

        let response = server.post("/exercises/generate").multipart(form).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["mode"], "local");
        assert_eq!(body["topic"], "B篇");
        assert_eq!(body["fileName"], "B篇_二次开发练习.docx");
        assert_eq!(body["questionTypes"], json!(["阅读理解"]));
        assert_eq!(body["exercises"]["kind"], "structured");

        let content = &body["exercises"]["content"];
        assert!(content.get("vocabulary").is_some());
        assert!(content.get("microWriting").is_some());
        assert!(content.get("cloze").is_none());
        assert!(content.get("grammar").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn default_topic_is_used_when_absent() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.post("/exercises/generate").multipart(paper_form()).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["topic"], "A篇");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_flag_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let form = paper_form().add_text("include_vocab", "sometimes");

        let response = server.post("/exercises/generate").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["resource"], "include_vocab");
        Ok(())
    }

    #[tokio::test]
    async fn remote_generation_returns_model_text() -> anyhow::Result<()> {
        let provider = MockCompletionProvider::with_response("【核心长难句三纽扣拆解】").recording();
        let server = create_test_server_with_service(provider.clone().into_service())?;

        let response = server.post("/exercises/generate").multipart(paper_form()).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["mode"], "remote");
        assert_eq!(body["fileName"], "2024高考英语_二次开发练习.txt");
        assert_eq!(
            body["exercises"],
            json!({ "kind": "freeForm", "content": "【核心长难句三纽扣拆解】" })
        );

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("oceans"));
        Ok(())
    }

    #[tokio::test]
    async fn remote_failure_is_a_bad_gateway() -> anyhow::Result<()> {
        let service = MockCompletionProvider::failing().into_service();
        let server = create_test_server_with_service(service)?;

        let response = server.post("/exercises/generate").multipart(paper_form()).await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        assert_eq!(response.json::<Value>()["name"], "remote_generation_error");
        Ok(())
    }

    #[tokio::test]
    async fn slow_remote_failure_outlives_the_request_timeout() -> anyhow::Result<()> {
        let generation = ExerciseGenerationService::new(RemoteExerciseProvider::new(SlowModel));
        let recovery = RecoveryConfig::with_timeout_secs(1).without_timeout_for(GENERATION_ROUTES);
        let app = routes()
            .with_state(ServiceState::new(generation))
            .with_recovery(&recovery);
        let server = TestServer::new(app)?;

        let response = server.post("/exercises/generate").multipart(paper_form()).await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        assert_eq!(response.json::<Value>()["name"], "remote_generation_error");
        Ok(())
    }

    #[tokio::test]
    async fn unknown_include_fields_are_ignored() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let form = paper_form().add_text("include_notes", "maybe");

        let response = server.post("/exercises/generate").multipart(form).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["exercises"]["kind"], "structured");
        Ok(())
    }

    #[tokio::test]
    async fn local_download_is_a_docx() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let form = paper_form().add_text("topic", "C篇");

        let response = server.post("/exercises/download").multipart(form).await;
        response.assert_status_ok();

        let disposition = response.header(header::CONTENT_DISPOSITION);
        let disposition = disposition.to_str()?;
        assert!(disposition.starts_with("attachment; filename*=UTF-8''C%E7%AF%87_"));
        assert!(disposition.ends_with(".docx"));

        let xml = document_xml(response.as_bytes());
        assert!(xml.contains("C篇 - 二次开发练习"));
        assert!(xml.contains("一、话题词汇"));
        Ok(())
    }

    #[tokio::test]
    async fn remote_download_is_plain_text() -> anyhow::Result<()> {
        let service = MockCompletionProvider::with_response("练习内容").into_service();
        let server = create_test_server_with_service(service)?;

        let response = server.post("/exercises/download").multipart(paper_form()).await;
        response.assert_status_ok();
        assert_eq!(
            response.header(header::CONTENT_TYPE).to_str()?,
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.text(), "练习内容");
        Ok(())
    }

    #[tokio::test]
    async fn export_renders_the_given_payload() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let body = json!({
            "topic": "D篇",
            "exercises": {
                "phraseTranslation": {
                    "chinese": ["事实上"],
                    "english": ["in fact"]
                }
            }
        });

        let response = server.post("/exercises/export").json(&body).await;
        response.assert_status_ok();

        let xml = document_xml(response.as_bytes());
        assert!(xml.contains("三、短语翻译"));
        assert!(xml.contains("in fact"));
        assert!(!xml.contains("一、话题词汇"));
        Ok(())
    }

    #[tokio::test]
    async fn export_rejects_mismatched_phrase_columns() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let body = json!({
            "topic": "A篇",
            "exercises": {
                "phraseTranslation": { "chinese": ["事实上", "总之"], "english": ["in fact"] }
            }
        });

        let response = server.post("/exercises/export").json(&body).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["name"], "payload_shape_error");
        Ok(())
    }

    #[tokio::test]
    async fn export_rejects_malformed_payloads() -> anyhow::Result<()> {
        let server = create_test_server()?;
        let body = json!({ "topic": "A篇", "exercises": { "cloze": "not a list" } });

        let response = server.post("/exercises/export").json(&body).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["name"], "payload_shape_error");
        Ok(())
    }
}
