//! Application key records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application key.
///
/// `application_key` (the secret) is only present in the response to key
/// creation; it is redacted from Debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationKey {
    pub account_id: String,

    pub application_key_id: String,

    #[serde(default)]
    pub application_key: Option<String>,

    #[serde(default)]
    pub bucket_id: Option<String>,

    #[serde(default)]
    pub capabilities: Vec<String>,

    /// Milliseconds since the epoch.
    #[serde(default)]
    pub expiration_timestamp: Option<i64>,

    pub key_name: String,

    #[serde(default)]
    pub name_prefix: Option<String>,

    #[serde(default)]
    pub options: Vec<String>,
}

impl ApplicationKey {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expiration_timestamp
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

impl fmt::Debug for ApplicationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationKey")
            .field("account_id", &self.account_id)
            .field("application_key_id", &self.application_key_id)
            .field(
                "application_key",
                &self.application_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("bucket_id", &self.bucket_id)
            .field("capabilities", &self.capabilities)
            .field("expiration_timestamp", &self.expiration_timestamp)
            .field("key_name", &self.key_name)
            .field("name_prefix", &self.name_prefix)
            .field("options", &self.options)
            .finish()
    }
}

/// Parameters for creating an application key.
///
/// # Example
///
/// ```
/// use b2_core::NewApplicationKey;
///
/// let key = NewApplicationKey::new("backup", ["listFiles", "readFiles"])
///     .restrict_to_bucket("bucket-id")
///     .with_name_prefix("nightly/")
///     .valid_for_seconds(86_400);
/// assert_eq!(key.capabilities.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplicationKey {
    pub key_name: String,
    pub capabilities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_duration_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
}

impl NewApplicationKey {
    pub fn new<I, S>(key_name: impl Into<String>, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key_name: key_name.into(),
            capabilities: capabilities.into_iter().map(Into::into).collect(),
            valid_duration_in_seconds: None,
            bucket_id: None,
            name_prefix: None,
        }
    }

    pub fn restrict_to_bucket(mut self, bucket_id: impl Into<String>) -> Self {
        self.bucket_id = Some(bucket_id.into());
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    pub fn valid_for_seconds(mut self, seconds: u64) -> Self {
        self.valid_duration_in_seconds = Some(seconds);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_key_secret_is_redacted() {
        let key: ApplicationKey = serde_json::from_value(json!({
            "accountId": "acct1",
            "applicationKey": "K001verysecret",
            "applicationKeyId": "001key",
            "bucketId": null,
            "capabilities": ["listFiles"],
            "expirationTimestamp": null,
            "keyName": "ci",
            "namePrefix": null,
            "options": ["s3"]
        }))
        .unwrap();

        let debug = format!("{:?}", key);
        assert!(debug.contains("001key"));
        assert!(!debug.contains("K001verysecret"));
    }

    #[test]
    fn new_key_omits_unset_fields() {
        let body = serde_json::to_value(NewApplicationKey::new("ci", ["listBuckets"])).unwrap();
        assert_eq!(
            body,
            json!({"keyName": "ci", "capabilities": ["listBuckets"]})
        );
    }
}
