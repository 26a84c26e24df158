//! Chat-completion response body.

use serde::{Deserialize, Serialize};

use super::ChatMessage;
use crate::{Error, Result};

/// MiniMax status block. A non-zero code means the request was rejected even
/// though the HTTP status was successful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponse {
    #[serde(default)]
    pub status_code: i64,
    #[serde(default)]
    pub status_msg: String,
}

/// One generated alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub message: Option<ChatMessage>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub total_tokens: u32,
}

/// Body returned by `POST /v1/text/chatcompletion_v2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default)]
    pub base_resp: Option<BaseResponse>,
}

impl ChatCompletionResponse {
    /// Returns the content of the first choice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rejected`] for a non-zero `base_resp.status_code` and
    /// [`Error::EmptyResponse`] when the first choice carries no content.
    pub fn into_content(self) -> Result<String> {
        if let Some(base) = &self.base_resp
            && base.status_code != 0
        {
            return Err(Error::Rejected {
                code: base.status_code,
                message: base.status_msg.clone(),
            });
        }

        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or(Error::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice() {
        let json = r#"{
            "id": "abc",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "练习"}, "finish_reason": "stop"}],
            "model": "abab6.5-chat",
            "usage": {"total_tokens": 42},
            "base_resp": {"status_code": 0, "status_msg": "success"}
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_content().unwrap(), "练习");
    }

    #[test]
    fn non_zero_status_is_rejected() {
        let json = r#"{"choices": [], "base_resp": {"status_code": 1004, "status_msg": "auth failed"}}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        match response.into_content() {
            Err(Error::Rejected { code, message }) => {
                assert_eq!(code, 1004);
                assert_eq!(message, "auth failed");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn missing_choices_is_empty() {
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.into_content(), Err(Error::EmptyResponse)));
    }
}
