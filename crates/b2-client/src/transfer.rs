//! Single-shot uploads and downloads.

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::Utc;
use sha1::{Digest, Sha1};
use tracing::{debug, instrument};

use b2_core::types::{decode_file_name, encode_file_name, encode_query_value};
use b2_core::{
    AuthToken, DownloadAuthorization, DownloadedFile, Error, File, HttpRequest, HttpResponse,
    Result, Transport, UploadUrl,
};

use crate::client::B2Client;
use crate::endpoints::*;

/// Content type that lets the server pick one from the file name.
pub const AUTO_CONTENT_TYPE: &str = "b2/x-auto";

/// Longest validity of a download authorization: one week.
pub const MAX_DOWNLOAD_VALIDITY_SECS: u64 = 604_800;

const INFO_HEADER_PREFIX: &str = "X-Bz-Info-";
pub(crate) const LAST_MODIFIED_INFO: &str = "src_last_modified_millis";

/// Optional settings for an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Defaults to [`AUTO_CONTENT_TYPE`].
    pub content_type: Option<String>,
    /// Source modification time. Falls back to a `src_last_modified_millis`
    /// entry in `file_info`, then to now.
    pub last_modified_millis: Option<i64>,
    /// Custom metadata, sent as `X-Bz-Info-*` headers.
    pub file_info: BTreeMap<String, String>,
}

impl UploadOptions {
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_last_modified_millis(mut self, millis: i64) -> Self {
        self.last_modified_millis = Some(millis);
        self
    }

    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.file_info.insert(key.into(), value.into());
        self
    }

    pub(crate) fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(AUTO_CONTENT_TYPE)
    }

    pub(crate) fn last_modified_millis(&self) -> Result<i64> {
        if let Some(millis) = self.last_modified_millis {
            return Ok(millis);
        }
        match self.file_info.get(LAST_MODIFIED_INFO) {
            Some(value) => value.parse().map_err(|_| {
                Error::invalid_argument(format!(
                    "{} must be milliseconds since the epoch, got {:?}",
                    LAST_MODIFIED_INFO, value
                ))
            }),
            None => Ok(Utc::now().timestamp_millis()),
        }
    }
}

/// Hex SHA-1 of a payload, as B2 expects it.
pub(crate) fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

impl<T: Transport> B2Client<T> {
    /// Get a URL and token for uploading one file into a bucket.
    #[instrument(skip(self))]
    pub async fn get_upload_url(&self, bucket_id: &str) -> Result<UploadUrl> {
        debug!("Getting upload URL");
        self.call(GET_UPLOAD_URL, &BucketIdRequest { bucket_id })
            .await
    }

    /// Upload a file in one request.
    #[instrument(skip(self, data, options), fields(len = data.len()))]
    pub async fn upload_file(
        &self,
        bucket_id: &str,
        file_name: &str,
        data: Bytes,
        options: &UploadOptions,
    ) -> Result<File> {
        let last_modified = options.last_modified_millis()?;
        let target = self.get_upload_url(bucket_id).await?;
        debug!("Uploading file");

        let mut request = HttpRequest::post(&target.upload_url)
            .header("Authorization", target.authorization_token.as_str())
            .header("X-Bz-File-Name", encode_file_name(file_name))
            .header("Content-Type", options.content_type())
            .header("Content-Length", data.len().to_string())
            .header("X-Bz-Content-Sha1", sha1_hex(&data))
            .header(
                format!("{}{}", INFO_HEADER_PREFIX, LAST_MODIFIED_INFO),
                last_modified.to_string(),
            );
        for (key, value) in options
            .file_info
            .iter()
            .filter(|(key, _)| key.as_str() != LAST_MODIFIED_INFO)
        {
            request = request.header(
                format!("{}{}", INFO_HEADER_PREFIX, key),
                encode_file_name(value),
            );
        }

        let response = self.send(request.body(data)).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Download a file by bucket and file name.
    #[instrument(skip(self))]
    pub async fn download_file_by_name(
        &self,
        bucket_name: &str,
        file_name: &str,
    ) -> Result<DownloadedFile> {
        let session = self.ensure_authorized().await?;
        debug!("Downloading file");

        let request = HttpRequest::get(session.download_url.file_url(bucket_name, file_name))
            .header("Authorization", session.token.as_str());
        let response = self.send(request).await?;

        Ok(downloaded_file(file_name, response))
    }

    /// Not supported by this client.
    pub async fn download_file_by_id(&self, _file_id: &str) -> Result<DownloadedFile> {
        Err(Error::NotImplemented("download_file_by_id"))
    }

    /// Get a token that lets anyone download files under `prefix`.
    #[instrument(skip(self))]
    pub async fn get_download_authorization(
        &self,
        prefix: &str,
        bucket_id: &str,
        valid_for_secs: u64,
    ) -> Result<DownloadAuthorization> {
        if !(1..=MAX_DOWNLOAD_VALIDITY_SECS).contains(&valid_for_secs) {
            return Err(Error::invalid_argument(format!(
                "validity must be between 1 and {} seconds, got {}",
                MAX_DOWNLOAD_VALIDITY_SECS, valid_for_secs
            )));
        }

        let body = DownloadAuthorizationRequest {
            bucket_id,
            file_name_prefix: prefix,
            valid_duration_in_seconds: valid_for_secs,
        };
        self.call(GET_DOWNLOAD_AUTHORIZATION, &body).await
    }

    /// Build a download URL that carries its own authorization.
    ///
    /// No request is made beyond authorizing the account if needed.
    pub async fn create_download_url(
        &self,
        path: &str,
        bucket_name: &str,
        token: &AuthToken,
    ) -> Result<String> {
        let session = self.ensure_authorized().await?;
        Ok(format!(
            "{}?Authorization={}",
            session.download_url.file_url(bucket_name, path),
            encode_query_value(token.as_str())
        ))
    }
}

fn downloaded_file(file_name: &str, response: HttpResponse) -> DownloadedFile {
    let file_info = response
        .headers
        .iter()
        .filter_map(|(name, value)| {
            let prefix = name.get(..INFO_HEADER_PREFIX.len())?;
            if !prefix.eq_ignore_ascii_case(INFO_HEADER_PREFIX) {
                return None;
            }
            Some((
                name[INFO_HEADER_PREFIX.len()..].to_string(),
                decode_file_name(value),
            ))
        })
        .collect();

    DownloadedFile {
        file_id: response.header("x-bz-file-id").map(str::to_string),
        file_name: file_name.to_string(),
        content_type: response.header("content-type").map(str::to_string),
        content_sha1: response.header("x-bz-content-sha1").map(str::to_string),
        upload_timestamp: response
            .header("x-bz-upload-timestamp")
            .and_then(|v| v.parse().ok()),
        file_info,
        body: response.body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha1_matches_known_digest() {
        assert_eq!(sha1_hex(b"test"), "a94a8fe5ccb19ba61c4c0873d391e987982fbbd3");
    }

    #[test]
    fn options_default_to_auto_content_type() {
        let options = UploadOptions::default();
        assert_eq!(options.content_type(), "b2/x-auto");
        assert_eq!(
            UploadOptions::default()
                .with_last_modified_millis(42)
                .last_modified_millis()
                .unwrap(),
            42
        );
    }

    #[test]
    fn last_modified_falls_back_to_file_info() {
        let options = UploadOptions::default().with_info(LAST_MODIFIED_INFO, "1533777445000");
        assert_eq!(options.last_modified_millis().unwrap(), 1533777445000);

        let explicit = options.clone().with_last_modified_millis(7);
        assert_eq!(explicit.last_modified_millis().unwrap(), 7);

        let err = UploadOptions::default()
            .with_info(LAST_MODIFIED_INFO, "yesterday")
            .last_modified_millis()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn download_collects_info_headers() {
        let response = HttpResponse::new(200, "hello")
            .with_header("x-bz-file-id", "4_z1")
            .with_header("content-type", "text/plain")
            .with_header("x-bz-content-sha1", "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d")
            .with_header("x-bz-upload-timestamp", "1533779200000")
            .with_header("X-Bz-Info-author", "alice")
            .with_header("x-bz-info-note", "caf%C3%A9%20au%20lait");

        let file = downloaded_file("notes/hello.txt", response);

        assert_eq!(file.file_id.as_deref(), Some("4_z1"));
        assert_eq!(file.content_type.as_deref(), Some("text/plain"));
        assert_eq!(file.upload_timestamp, Some(1533779200000));
        assert_eq!(file.file_info.get("author").map(String::as_str), Some("alice"));
        assert_eq!(
            file.file_info.get("note").map(String::as_str),
            Some("café au lait")
        );
        assert_eq!(file.content_length(), 5);
    }
}
