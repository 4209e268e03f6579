//! Token types for B2 authentication.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authorization token returned by account authorization.
///
/// The token is sent verbatim in the `Authorization` header of every later
/// API call.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_token_hides_value_in_debug() {
        let token = AuthToken::new("4_0022623512fc8f80000000001_01a2b3c4_acct");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("4_002"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn auth_token_decodes_from_plain_string() {
        let token: AuthToken = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(token.as_str(), "abc");
    }
}
