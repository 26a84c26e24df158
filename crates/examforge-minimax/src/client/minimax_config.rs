//! MiniMax client configuration
//!
//! This module provides configuration structures and builders for the MiniMax
//! client.

use std::time::Duration;

#[cfg(feature = "config")]
use clap::Args;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use url::Url;

use super::MiniMaxCredentials;
use crate::error::{Error, Result};

/// Default values for configuration options.
mod defaults {
    /// MiniMax API base URL.
    pub const BASE_URL: &str = "https://api.minimax.chat";

    /// Default chat model.
    pub const MODEL: &str = "abab6.5-chat";

    /// Default request timeout in seconds.
    pub const TIMEOUT_SECS: u64 = 120;

    /// Default connection timeout in seconds.
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration for the MiniMax client.
///
/// Holds the endpoint, model, timeouts and (optionally) credentials. Missing
/// credentials only fail once a client is built from the configuration.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(
    name = "MiniMaxBuilder",
    pattern = "owned",
    setter(into, strip_option, prefix = "with"),
    build_fn(validate = "Self::validate_config")
)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct MiniMaxConfig {
    /// MiniMax API key, sent as a bearer token.
    #[cfg_attr(
        feature = "config",
        arg(long = "minimax-api-key", env = "MINIMAX_API_KEY", hide_env_values = true)
    )]
    #[builder(default)]
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// MiniMax group id, sent as the `GroupId` query parameter.
    #[cfg_attr(feature = "config", arg(long = "minimax-group-id", env = "MINIMAX_GROUP_ID"))]
    #[builder(default)]
    #[serde(default)]
    pub group_id: Option<String>,

    /// Base URL of the MiniMax API.
    #[cfg_attr(
        feature = "config",
        arg(long = "minimax-base-url", env = "MINIMAX_BASE_URL", default_value = defaults::BASE_URL)
    )]
    #[builder(setter(custom), default = "MiniMaxConfig::default_base_url()")]
    #[serde(default = "MiniMaxConfig::default_base_url")]
    pub base_url: Url,

    /// Chat model used for completions.
    #[cfg_attr(
        feature = "config",
        arg(long = "minimax-model", env = "MINIMAX_MODEL", default_value = defaults::MODEL)
    )]
    #[builder(default = "defaults::MODEL.to_owned()")]
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(long = "minimax-timeout", env = "MINIMAX_TIMEOUT", default_value_t = defaults::TIMEOUT_SECS)
    )]
    #[builder(default = "defaults::TIMEOUT_SECS")]
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[cfg_attr(
        feature = "config",
        arg(
            long = "minimax-connect-timeout",
            env = "MINIMAX_CONNECT_TIMEOUT",
            default_value_t = defaults::CONNECT_TIMEOUT_SECS
        )
    )]
    #[builder(default = "defaults::CONNECT_TIMEOUT_SECS")]
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_model() -> String {
    defaults::MODEL.to_owned()
}

fn default_timeout() -> u64 {
    defaults::TIMEOUT_SECS
}

fn default_connect_timeout() -> u64 {
    defaults::CONNECT_TIMEOUT_SECS
}

impl Default for MiniMaxConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            group_id: None,
            base_url: Self::default_base_url(),
            model: default_model(),
            timeout_secs: defaults::TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
        }
    }
}

impl MiniMaxConfig {
    /// Create a new configuration builder
    pub fn builder() -> MiniMaxBuilder {
        MiniMaxBuilder::default()
    }

    fn default_base_url() -> Url {
        Url::parse(defaults::BASE_URL).unwrap_or_else(|e| panic!("invalid default URL: {e}"))
    }

    /// Returns the request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the connection timeout as a `Duration`.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the user agent sent with every request.
    pub fn user_agent(&self) -> String {
        format!("examforge-minimax/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Returns `true` if both the API key and the group id are set.
    pub fn has_credentials(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.api_key) && present(&self.group_id)
    }

    /// Extracts the credentials.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the API key or group id is missing.
    pub fn credentials(&self) -> Result<MiniMaxCredentials> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::invalid_config("MINIMAX_API_KEY is not set"))?;
        let group_id = self
            .group_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::invalid_config("MINIMAX_GROUP_ID is not set"))?;
        Ok(MiniMaxCredentials::new(api_key, group_id))
    }

    /// Checks timeouts and the model name.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(Error::invalid_config(format!(
                "MiniMax timeout {} seconds is invalid. Must be between 1 and 600 seconds.",
                self.timeout_secs
            )));
        }
        if self.connect_timeout_secs == 0 {
            return Err(Error::invalid_config("connect timeout must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(Error::invalid_config("model must not be empty"));
        }
        Ok(())
    }
}

impl MiniMaxBuilder {
    /// Set the base URL for the MiniMax API
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.base_url = Some(
            url.parse()
                .map_err(|e| Error::invalid_config(format!("Invalid base URL '{url}': {e}")))?,
        );
        Ok(self)
    }

    fn validate_config(&self) -> std::result::Result<(), String> {
        if let Some(timeout) = self.timeout_secs
            && timeout == 0
        {
            return Err("Timeout must be greater than 0".to_string());
        }

        if let Some(connect_timeout) = self.connect_timeout_secs
            && connect_timeout == 0
        {
            return Err("Connect timeout must be greater than 0".to_string());
        }

        if let Some(model) = &self.model
            && model.trim().is_empty()
        {
            return Err("Model must not be empty".to_string());
        }

        Ok(())
    }
}
