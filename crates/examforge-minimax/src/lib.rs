#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client operations
pub const TRACING_TARGET_CLIENT: &str = "examforge_minimax::client";

/// Tracing target for API operations
pub const TRACING_TARGET_API: &str = "examforge_minimax::api";

mod client;
mod completion;
mod error;
mod provider;

pub use crate::client::{MiniMaxBuilder, MiniMaxClient, MiniMaxConfig, MiniMaxCredentials};
pub use crate::completion::{
    BaseResponse, ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Usage,
};
pub use crate::error::{Error, Result};
