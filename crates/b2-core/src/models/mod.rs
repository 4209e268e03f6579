//! Records returned by the B2 API.
//!
//! All models are plain data decoded from camelCase JSON. Optional and
//! nullable fields survive a decode/encode round trip.

mod bucket;
mod file;
mod key;
mod list;
mod transfer;

pub use bucket::{
    Bucket, BucketEncryption, FileLockConfiguration, FileLockSettings, RetentionPeriod,
    RetentionPolicy,
};
pub use file::{DeletedFileVersion, EncryptionSetting, File};
pub use key::{ApplicationKey, NewApplicationKey};
pub use list::{ListBucketsResponse, ListFilesResponse, ListKeysResponse};
pub use transfer::{
    CancelledLargeFile, DownloadAuthorization, DownloadedFile, UploadPartUrl, UploadUrl,
    UploadedPart,
};
