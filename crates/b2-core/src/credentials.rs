//! Application key credentials.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Application key credentials for B2 account authorization.
///
/// Holds the application key id and the secret application key.
///
/// # Security
///
/// The secret is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use b2_core::Credentials;
///
/// let creds = Credentials::new("0012345abcdef0000000001", "K001secret");
/// assert_eq!(creds.key_id(), "0012345abcdef0000000001");
/// ```
#[derive(Clone)]
pub struct Credentials {
    key_id: String,
    application_key: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `key_id` - The application key id (or master key id)
    /// * `application_key` - The secret application key
    pub fn new(key_id: impl Into<String>, application_key: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            application_key: application_key.into(),
        }
    }

    /// Returns the application key id.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Returns the `Authorization` header value for account authorization.
    ///
    /// # Security
    ///
    /// The value embeds the secret. Never log or display it.
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.key_id, self.application_key);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

// Hide the secret in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("application_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_secret_in_debug() {
        let creds = Credentials::new("key-id", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("key-id"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn basic_auth_header_encodes_pair() {
        let creds = Credentials::new("id", "key");
        // base64("id:key")
        assert_eq!(creds.basic_auth_header(), "Basic aWQ6a2V5");
    }
}
