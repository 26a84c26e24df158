//! MiniMax client module.
//!
//! This module provides the main client interface for MiniMax API operations.

mod credentials;
mod minimax_client;
mod minimax_config;

pub use credentials::MiniMaxCredentials;
pub use minimax_client::MiniMaxClient;
pub use minimax_config::{MiniMaxBuilder, MiniMaxConfig};
