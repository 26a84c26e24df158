//! Wire types of the chat-completion endpoint.

mod chat_request;
mod chat_response;

pub use chat_request::{ChatCompletionRequest, ChatMessage};
pub use chat_response::{BaseResponse, ChatChoice, ChatCompletionResponse, Usage};

/// Path of the chat-completion endpoint, relative to the base URL.
pub(crate) const CHAT_COMPLETION_PATH: &str = "/v1/text/chatcompletion_v2";
