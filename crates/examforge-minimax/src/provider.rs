//! [`CompletionProvider`] implementation backed by MiniMax.

use examforge_core::{CompletionProvider, CompletionRequest, CompletionResponse};

use crate::{ChatCompletionRequest, MiniMaxClient};

#[async_trait::async_trait]
impl CompletionProvider for MiniMaxClient {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> examforge_core::Result<CompletionResponse> {
        let body = ChatCompletionRequest::single_user_message(
            self.config().model.clone(),
            request.prompt.clone(),
            request.temperature,
            request.max_tokens,
        );

        let response = self.chat_completion(&body).await?;
        let model = response.model.clone();
        let total_tokens = response.usage.as_ref().map(|u| u.total_tokens);
        let content = response.into_content()?;

        Ok(CompletionResponse {
            model,
            total_tokens,
            ..CompletionResponse::new(request.request_id, content)
        })
    }
}
