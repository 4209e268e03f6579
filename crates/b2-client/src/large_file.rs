//! Large-file (multi-part) uploads.

use std::collections::BTreeMap;

use bytes::Bytes;
use tracing::{debug, info, instrument, warn};

use b2_core::{
    CancelledLargeFile, Error, File, HttpRequest, Result, Transport, UploadPartUrl, UploadedPart,
};

use crate::client::B2Client;
use crate::endpoints::*;
use crate::transfer::{LAST_MODIFIED_INFO, UploadOptions, sha1_hex};

/// Largest part number B2 accepts.
pub const MAX_PART_NUMBER: u32 = 10_000;

/// Progress callback type.
pub type ProgressCallback = Box<dyn Fn(UploadProgress) + Send + Sync>;

/// Upload progress information.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadProgress {
    pub bytes_uploaded: u64,
    pub total_bytes: u64,
    pub current_part: u32,
    pub total_parts: u32,
}

impl UploadProgress {
    pub fn percentage(&self) -> f64 {
        if self.total_bytes == 0 {
            return 100.0;
        }
        (self.bytes_uploaded as f64 / self.total_bytes as f64) * 100.0
    }
}

impl<T: Transport> B2Client<T> {
    #[instrument(skip(self, file_info))]
    pub async fn start_large_file(
        &self,
        bucket_id: &str,
        file_name: &str,
        content_type: &str,
        file_info: &BTreeMap<String, String>,
    ) -> Result<File> {
        debug!("Starting large file");
        let body = StartLargeFileRequest {
            bucket_id,
            file_name,
            content_type,
            file_info,
        };
        self.call(START_LARGE_FILE, &body).await
    }

    #[instrument(skip(self))]
    pub async fn get_upload_part_url(&self, file_id: &str) -> Result<UploadPartUrl> {
        self.call(GET_UPLOAD_PART_URL, &FileIdRequest { file_id })
            .await
    }

    /// Upload one part of a large file. Parts are numbered from 1.
    #[instrument(skip(self, target, data), fields(file_id = %target.file_id, len = data.len()))]
    pub async fn upload_part(
        &self,
        target: &UploadPartUrl,
        part_number: u32,
        data: Bytes,
    ) -> Result<UploadedPart> {
        if !(1..=MAX_PART_NUMBER).contains(&part_number) {
            return Err(Error::invalid_argument(format!(
                "part number must be between 1 and {}, got {}",
                MAX_PART_NUMBER, part_number
            )));
        }

        debug!("Uploading part");
        let request = HttpRequest::post(&target.upload_url)
            .header("Authorization", target.authorization_token.as_str())
            .header("X-Bz-Part-Number", part_number.to_string())
            .header("Content-Length", data.len().to_string())
            .header("X-Bz-Content-Sha1", sha1_hex(&data))
            .body(data);

        let response = self.send(request).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Assemble the uploaded parts. `part_sha1s[0]` belongs to part 1.
    #[instrument(skip(self, part_sha1s), fields(parts = part_sha1s.len()))]
    pub async fn finish_large_file(&self, file_id: &str, part_sha1s: &[String]) -> Result<File> {
        debug!("Finishing large file");
        let body = FinishLargeFileRequest {
            file_id,
            part_sha1_array: part_sha1s,
        };
        self.call(FINISH_LARGE_FILE, &body).await
    }

    /// Abandon an unfinished large file and its parts.
    #[instrument(skip(self))]
    pub async fn cancel_large_file(&self, file_id: &str) -> Result<CancelledLargeFile> {
        debug!("Cancelling large file");
        self.call(CANCEL_LARGE_FILE, &FileIdRequest { file_id })
            .await
    }

    /// Not supported by this client.
    pub async fn list_unfinished_large_files(&self, _bucket_id: &str) -> Result<Vec<File>> {
        Err(Error::NotImplemented("list_unfinished_large_files"))
    }

    /// Not supported by this client.
    pub async fn update_file_retention(&self) -> Result<File> {
        Err(Error::NotImplemented("update_file_retention"))
    }

    /// Not supported by this client.
    pub async fn update_legal_hold(&self) -> Result<File> {
        Err(Error::NotImplemented("update_legal_hold"))
    }

    /// Upload `data` as a large file, part by part.
    ///
    /// Data that fits in a single part is sent as an ordinary upload, since
    /// a large file needs at least two parts. If a part fails the large file
    /// is cancelled and the part's error is returned.
    #[instrument(skip(self, data, options, progress), fields(len = data.len()))]
    pub async fn upload_large_file(
        &self,
        bucket_id: &str,
        file_name: &str,
        data: Bytes,
        options: &UploadOptions,
        progress: Option<ProgressCallback>,
    ) -> Result<File> {
        options.last_modified_millis()?;
        let session = self.ensure_authorized().await?;
        let part_size = usize::try_from(session.part_size(self.config().part_size))
            .unwrap_or(usize::MAX);
        let total_bytes = data.len() as u64;

        if data.len() <= part_size {
            debug!(part_size, "Data fits in one part, using a single upload");
            let file = self.upload_file(bucket_id, file_name, data, options).await?;
            if let Some(cb) = progress.as_ref() {
                cb(UploadProgress {
                    bytes_uploaded: total_bytes,
                    total_bytes,
                    current_part: 1,
                    total_parts: 1,
                });
            }
            return Ok(file);
        }

        let total_parts = data.len().div_ceil(part_size);
        if total_parts > MAX_PART_NUMBER as usize {
            return Err(Error::invalid_argument(format!(
                "{} bytes in parts of {} needs {} parts, more than {}",
                total_bytes, part_size, total_parts, MAX_PART_NUMBER
            )));
        }
        let total_parts = total_parts as u32;

        let mut upload = LargeFileUpload::start(self.clone(), bucket_id, file_name, options).await?;
        info!(file_id = %upload.file_id(), total_parts, "Started large file");

        let mut bytes_uploaded = 0u64;
        let mut offset = 0usize;
        while offset < data.len() {
            let end = (offset + part_size).min(data.len());
            let part = data.slice(offset..end);

            if let Err(err) = upload.upload_part(part).await {
                warn!(error = %err, part = upload.parts_uploaded() + 1, "Part failed, cancelling large file");
                if let Err(cancel_err) = upload.cancel().await {
                    warn!(error = %cancel_err, "Failed to cancel large file");
                }
                return Err(err);
            }

            bytes_uploaded += (end - offset) as u64;
            offset = end;

            if let Some(cb) = progress.as_ref() {
                cb(UploadProgress {
                    bytes_uploaded,
                    total_bytes,
                    current_part: upload.parts_uploaded() as u32,
                    total_parts,
                });
            }
        }

        upload.finish().await
    }
}

/// An unfinished large file that parts are being uploaded to.
///
/// Parts are numbered in the order they are uploaded. Finish or cancel the
/// upload when done; dropping it leaves the large file unfinished on the
/// server.
pub struct LargeFileUpload<T: Transport> {
    client: B2Client<T>,
    file: File,
    target: Option<UploadPartUrl>,
    part_sha1s: Vec<String>,
}

impl<T: Transport> LargeFileUpload<T> {
    /// Start a new large file.
    pub async fn start(
        client: B2Client<T>,
        bucket_id: &str,
        file_name: &str,
        options: &UploadOptions,
    ) -> Result<Self> {
        let mut file_info = options.file_info.clone();
        file_info.insert(
            LAST_MODIFIED_INFO.to_string(),
            options.last_modified_millis()?.to_string(),
        );

        let file = client
            .start_large_file(bucket_id, file_name, options.content_type(), &file_info)
            .await?;

        Ok(Self {
            client,
            file,
            target: None,
            part_sha1s: Vec::new(),
        })
    }

    /// Id of the large file, or an empty string if the server sent none.
    pub fn file_id(&self) -> &str {
        self.file.file_id.as_deref().unwrap_or_default()
    }

    pub fn parts_uploaded(&self) -> usize {
        self.part_sha1s.len()
    }

    /// Upload the next part.
    pub async fn upload_part(&mut self, data: Bytes) -> Result<UploadedPart> {
        let part_number = u32::try_from(self.part_sha1s.len() + 1).unwrap_or(u32::MAX);

        let target = match self.target.take() {
            Some(target) => target,
            None => self.client.get_upload_part_url(self.file_id()).await?,
        };

        let uploaded = self.client.upload_part(&target, part_number, data).await?;
        self.target = Some(target);
        self.part_sha1s.push(uploaded.content_sha1.clone());
        Ok(uploaded)
    }

    /// Assemble the uploaded parts into the final file.
    pub async fn finish(self) -> Result<File> {
        self.client
            .finish_large_file(self.file_id(), &self.part_sha1s)
            .await
    }

    /// Abandon the upload.
    pub async fn cancel(self) -> Result<CancelledLargeFile> {
        self.client.cancel_large_file(self.file_id()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_percentage() {
        let progress = UploadProgress {
            bytes_uploaded: 25,
            total_bytes: 100,
            current_part: 1,
            total_parts: 4,
        };
        assert_eq!(progress.percentage(), 25.0);

        let empty = UploadProgress {
            bytes_uploaded: 0,
            total_bytes: 0,
            current_part: 0,
            total_parts: 0,
        };
        assert_eq!(empty.percentage(), 100.0);
    }
}
