//! Authentication credentials for MiniMax.

use std::fmt;

/// API key and group id identifying a MiniMax account.
///
/// The key is sent as a bearer token and the group id as the `GroupId` query
/// parameter of every request.
#[derive(Clone, PartialEq, Eq)]
pub struct MiniMaxCredentials {
    api_key: String,
    group_id: String,
}

impl MiniMaxCredentials {
    /// Create credentials from an API key and group id.
    pub fn new(api_key: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            group_id: group_id.into(),
        }
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the group id.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

impl fmt::Debug for MiniMaxCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiniMaxCredentials")
            .field("api_key", &"<redacted>")
            .field("group_id", &self.group_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let credentials = MiniMaxCredentials::new("sk-secret", "group-1");
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("group-1"));
    }
}
