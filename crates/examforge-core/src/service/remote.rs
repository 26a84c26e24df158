//! Free-form exercise generation through a hosted model.

use std::fmt;
use std::sync::Arc;

use super::{
    CompletionProvider, CompletionRequest, ExerciseProvider, GeneratedExercises, GenerationMode,
    GenerationRequest,
};
use crate::{Result, TRACING_TARGET_GENERATION, prompt};

/// Embeds the paper in the instruction prompt and returns the model's answer
/// verbatim.
///
/// Topic, requirements and inclusion flags do not affect the prompt.
#[derive(Clone)]
pub struct RemoteExerciseProvider {
    completion: Arc<dyn CompletionProvider>,
}

impl fmt::Debug for RemoteExerciseProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteExerciseProvider").finish_non_exhaustive()
    }
}

impl RemoteExerciseProvider {
    /// Creates a new remote provider from a completion client.
    pub fn new<C>(completion: C) -> Self
    where
        C: CompletionProvider + 'static,
    {
        Self {
            completion: Arc::new(completion),
        }
    }

    /// Creates a new remote provider from a shared completion client.
    pub fn from_arc(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }
}

#[async_trait::async_trait]
impl ExerciseProvider for RemoteExerciseProvider {
    fn mode(&self) -> GenerationMode {
        GenerationMode::Remote
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedExercises> {
        let completion_request =
            CompletionRequest::new(prompt::compose(&request.text)).with_request_id(request.request_id);

        tracing::debug!(
            target: TRACING_TARGET_GENERATION,
            request_id = %request.request_id,
            prompt_len = completion_request.prompt.len(),
            "Sending prompt to completion provider"
        );

        let response = self.completion.complete(&completion_request).await?;
        Ok(GeneratedExercises::FreeForm(response.content))
    }
}
