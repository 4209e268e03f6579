//! Upload targets and transfer results.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::EncryptionSetting;
use crate::tokens::AuthToken;

/// Target for a single-shot upload.
///
/// The token is scoped to this URL and differs from the account token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrl {
    pub bucket_id: String,
    pub upload_url: String,
    pub authorization_token: AuthToken,
}

/// Target for uploading parts of one large file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPartUrl {
    pub file_id: String,
    pub upload_url: String,
    pub authorization_token: AuthToken,
}

/// A part accepted by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedPart {
    pub file_id: String,
    pub part_number: u32,
    pub content_length: u64,
    pub content_sha1: String,
    #[serde(default)]
    pub content_md5: Option<String>,
    #[serde(default)]
    pub server_side_encryption: Option<EncryptionSetting>,
    #[serde(default)]
    pub upload_timestamp: Option<i64>,
}

/// Result of cancelling an unfinished large file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledLargeFile {
    pub file_id: String,
    pub file_name: String,
    pub bucket_id: String,
    #[serde(default)]
    pub account_id: Option<String>,
}

/// Token granting download access to files under a name prefix.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAuthorization {
    pub bucket_id: String,
    pub file_name_prefix: String,
    pub authorization_token: AuthToken,
}

/// A downloaded file with the metadata the server sent in headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub file_id: Option<String>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub content_sha1: Option<String>,
    pub upload_timestamp: Option<i64>,
    /// `X-Bz-Info-*` headers, keyed without the prefix.
    pub file_info: BTreeMap<String, String>,
    pub body: Bytes,
}

impl DownloadedFile {
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
