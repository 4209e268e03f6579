//! B2 endpoint names and request bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use b2_core::{BucketType, NewApplicationKey};

// ============================================================================
// Endpoint Names
// ============================================================================

pub const AUTHORIZE_ACCOUNT: &str = "b2_authorize_account";

pub const CREATE_BUCKET: &str = "b2_create_bucket";
pub const DELETE_BUCKET: &str = "b2_delete_bucket";
pub const LIST_BUCKETS: &str = "b2_list_buckets";

pub const LIST_FILE_NAMES: &str = "b2_list_file_names";
pub const LIST_FILE_VERSIONS: &str = "b2_list_file_versions";
pub const GET_FILE_INFO: &str = "b2_get_file_info";
pub const COPY_FILE: &str = "b2_copy_file";
pub const HIDE_FILE: &str = "b2_hide_file";
pub const DELETE_FILE_VERSION: &str = "b2_delete_file_version";

pub const GET_UPLOAD_URL: &str = "b2_get_upload_url";
pub const START_LARGE_FILE: &str = "b2_start_large_file";
pub const GET_UPLOAD_PART_URL: &str = "b2_get_upload_part_url";
pub const FINISH_LARGE_FILE: &str = "b2_finish_large_file";
pub const CANCEL_LARGE_FILE: &str = "b2_cancel_large_file";
pub const GET_DOWNLOAD_AUTHORIZATION: &str = "b2_get_download_authorization";

pub const CREATE_KEY: &str = "b2_create_key";
pub const DELETE_KEY: &str = "b2_delete_key";
pub const LIST_KEYS: &str = "b2_list_keys";

// ============================================================================
// Request Bodies
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBucketRequest<'a> {
    pub account_id: &'a str,
    pub bucket_name: &'a str,
    pub bucket_type: &'a BucketType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBucketRequest<'a> {
    pub account_id: &'a str,
    pub bucket_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBucketsRequest<'a> {
    pub account_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<&'a str>,
    pub bucket_types: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFileNamesRequest<'a> {
    pub bucket_id: &'a str,
    pub max_file_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_file_name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFileVersionsRequest<'a> {
    pub bucket_id: &'a str,
    pub max_file_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_file_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_file_id: Option<&'a str>,
}

/// Body of every call that takes only a file id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileIdRequest<'a> {
    pub file_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketIdRequest<'a> {
    pub bucket_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyFileRequest<'a> {
    pub source_file_id: &'a str,
    pub file_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_bucket_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HideFileRequest<'a> {
    pub bucket_id: &'a str,
    pub file_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileVersionRequest<'a> {
    pub file_id: &'a str,
    pub file_name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartLargeFileRequest<'a> {
    pub bucket_id: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub file_info: &'a BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishLargeFileRequest<'a> {
    pub file_id: &'a str,
    pub part_sha1_array: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadAuthorizationRequest<'a> {
    pub bucket_id: &'a str,
    pub file_name_prefix: &'a str,
    pub valid_duration_in_seconds: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKeyRequest<'a> {
    pub account_id: &'a str,
    #[serde(flatten)]
    pub key: &'a NewApplicationKey,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteKeyRequest<'a> {
    pub application_key_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListKeysRequest<'a> {
    pub account_id: &'a str,
    pub max_key_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_application_key_id: Option<&'a str>,
}
