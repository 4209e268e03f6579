//! Bucket records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::file::EncryptionSetting;
use crate::types::BucketType;

/// A bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    pub account_id: String,

    pub bucket_id: String,

    pub bucket_name: String,

    pub bucket_type: BucketType,

    #[serde(default)]
    pub bucket_info: BTreeMap<String, String>,

    #[serde(default)]
    pub cors_rules: Vec<serde_json::Value>,

    #[serde(default)]
    pub file_lock_configuration: Option<FileLockConfiguration>,

    #[serde(default)]
    pub default_server_side_encryption: Option<BucketEncryption>,

    #[serde(default)]
    pub lifecycle_rules: Vec<serde_json::Value>,

    #[serde(default)]
    pub revision: u64,

    #[serde(default)]
    pub options: Vec<String>,
}

impl Bucket {
    /// Whether object lock is enabled, when the caller may read the setting.
    pub fn is_file_lock_enabled(&self) -> bool {
        self.file_lock_configuration
            .as_ref()
            .and_then(|c| c.value.as_ref())
            .is_some_and(|v| v.is_file_lock_enabled)
    }
}

/// Default encryption configured on a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketEncryption {
    pub is_client_authorized_to_read: bool,
    #[serde(default)]
    pub value: Option<EncryptionSetting>,
}

/// Object lock configuration of a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLockConfiguration {
    pub is_client_authorized_to_read: bool,
    /// Absent when the caller is not allowed to read it.
    #[serde(default)]
    pub value: Option<FileLockSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileLockSettings {
    #[serde(default)]
    pub default_retention: Option<RetentionPolicy>,
    #[serde(default)]
    pub is_file_lock_enabled: bool,
}

/// Default retention applied to new files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPolicy {
    /// `governance` or `compliance`.
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub period: Option<RetentionPeriod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionPeriod {
    pub duration: u32,
    /// `days` or `years`.
    pub unit: String,
}
