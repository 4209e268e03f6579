//! b2-client - HTTP client for the B2 object-storage API.
//!
//! [`B2Client`] authorizes lazily on first use and exposes every API call
//! as an async method. Listings come back as lazy [`Paginated`] streams
//! that fetch pages as they are consumed.
//!
//! ```no_run
//! use b2_client::{B2Client, ListFilesQuery};
//! use b2_core::Credentials;
//! use futures_util::TryStreamExt;
//!
//! # async fn example() -> b2_core::Result<()> {
//! let client = B2Client::new(Credentials::new("key-id", "application-key"))?;
//! let bucket = client.find_bucket_by_name("photos").await?;
//!
//! let mut files = client.list_file_names(ListFilesQuery::new(&bucket.bucket_id));
//! while let Some(file) = files.try_next().await? {
//!     println!("{} ({} bytes)", file.file_name, file.content_length);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`Paginated`]: b2_core::Paginated

mod buckets;
mod client;
mod config;
mod delete;
mod endpoints;
mod files;
mod keys;
mod large_file;
mod transfer;
mod transport;

pub use buckets::BucketFilter;
pub use client::B2Client;
pub use config::{ClientConfig, DEFAULT_AUTH_URL, MAX_PAGE_SIZE};
pub use delete::DeleteTarget;
pub use files::ListFilesQuery;
pub use large_file::{LargeFileUpload, MAX_PART_NUMBER, ProgressCallback, UploadProgress};
pub use transfer::{AUTO_CONTENT_TYPE, MAX_DOWNLOAD_VALIDITY_SECS, UploadOptions};
pub use transport::ReqwestTransport;
