//! Exercise generation service with observability.

use std::fmt;
use std::sync::Arc;

use jiff::Timestamp;

use super::{ExerciseProvider, GeneratedExercises, GenerationMode, GenerationRequest};
use crate::{Result, TRACING_TARGET_GENERATION};

/// Exercise generation service.
///
/// Wraps one [`ExerciseProvider`] and adds structured logging. Cloning is
/// cheap; the provider is shared.
#[derive(Clone)]
pub struct ExerciseGenerationService {
    provider: Arc<dyn ExerciseProvider>,
}

impl fmt::Debug for ExerciseGenerationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExerciseGenerationService")
            .field("mode", &self.provider.mode())
            .finish_non_exhaustive()
    }
}

impl ExerciseGenerationService {
    /// Creates a new service from a provider.
    pub fn new<P>(provider: P) -> Self
    where
        P: ExerciseProvider + 'static,
    {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Creates a new service from a shared provider.
    pub fn from_arc(provider: Arc<dyn ExerciseProvider>) -> Self {
        Self { provider }
    }

    /// Returns the mode of the wrapped provider.
    pub fn mode(&self) -> GenerationMode {
        self.provider.mode()
    }

    /// Generates exercises for the request.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedExercises> {
        request.validate()?;

        let started_at = Timestamp::now();

        tracing::debug!(
            target: TRACING_TARGET_GENERATION,
            request_id = %request.request_id,
            mode = %self.mode(),
            topic = %request.topic,
            text_len = request.text.len(),
            "Processing generation request"
        );

        let result = self.provider.generate(request).await;
        let elapsed = Timestamp::now().duration_since(started_at);

        match &result {
            Ok(exercises) => {
                let categories = exercises
                    .as_structured()
                    .map(|payload| payload.categories().len());
                tracing::info!(
                    target: TRACING_TARGET_GENERATION,
                    request_id = %request.request_id,
                    mode = %self.mode(),
                    categories,
                    elapsed_ms = elapsed.as_millis(),
                    "Exercise generation successful"
                );
            }
            Err(error) => {
                tracing::error!(
                    target: TRACING_TARGET_GENERATION,
                    request_id = %request.request_id,
                    mode = %self.mode(),
                    error = %error,
                    elapsed_ms = elapsed.as_millis(),
                    "Exercise generation failed"
                );
            }
        }

        result
    }
}
