//! File version records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::FileAction;

/// Server-side encryption applied to a file or bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionSetting {
    /// Encryption algorithm, e.g. `AES256`.
    #[serde(default)]
    pub algorithm: Option<String>,
    /// Encryption mode, e.g. `SSE-B2`.
    #[serde(default)]
    pub mode: Option<String>,
}

/// A file version, or a pseudo-directory from a delimiter listing.
///
/// Files are immutable snapshots of server state. Pseudo-directories have
/// [`FileAction::Folder`] and no file id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(default)]
    pub account_id: Option<String>,

    pub action: FileAction,

    #[serde(default)]
    pub bucket_id: Option<String>,

    #[serde(default)]
    pub content_length: u64,

    #[serde(default)]
    pub content_sha1: Option<String>,

    #[serde(default)]
    pub content_md5: Option<String>,

    #[serde(default)]
    pub content_type: Option<String>,

    /// Absent for pseudo-directories.
    #[serde(default)]
    pub file_id: Option<String>,

    /// Custom `X-Bz-Info-*` metadata.
    #[serde(default)]
    pub file_info: BTreeMap<String, String>,

    pub file_name: String,

    #[serde(default)]
    pub file_retention: Option<serde_json::Value>,

    #[serde(default)]
    pub legal_hold: Option<serde_json::Value>,

    #[serde(default)]
    pub server_side_encryption: Option<EncryptionSetting>,

    /// Milliseconds since the epoch.
    #[serde(default)]
    pub upload_timestamp: Option<i64>,
}

impl File {
    /// Whether this entry is a pseudo-directory.
    pub fn is_folder(&self) -> bool {
        self.action == FileAction::Folder
    }

    /// Upload time, if the server reported one.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.upload_timestamp
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }

    /// The `src_last_modified_millis` info entry, if present.
    pub fn source_last_modified(&self) -> Option<DateTime<Utc>> {
        self.file_info
            .get("src_last_modified_millis")
            .and_then(|v| v.parse::<i64>().ok())
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

/// Result of deleting one file version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedFileVersion {
    pub file_id: String,
    pub file_name: String,
}
