//! b2-core - Core types, models and traits for the B2 object-storage API.
//!
//! This crate holds everything that does not touch the network: validated
//! value types, the records the API returns, error classification, cursor
//! pagination and the [`Transport`] seam that clients send requests through.
//!
//! ```
//! use b2_core::{ApiErrorKind, ApiError};
//!
//! let err = ApiError::from_response(
//!     401,
//!     br#"{"status":401,"code":"expired_auth_token","message":"expired"}"#,
//! )
//! .unwrap();
//! assert_eq!(err.kind, ApiErrorKind::ExpiredToken);
//! ```

pub mod credentials;
pub mod error;
pub mod models;
pub mod pagination;
pub mod session;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::Credentials;
pub use error::{ApiError, ApiErrorKind, Error, TransportError};
pub use models::{
    ApplicationKey, Bucket, CancelledLargeFile, DeletedFileVersion, DownloadAuthorization,
    DownloadedFile, File, NewApplicationKey, UploadPartUrl, UploadUrl, UploadedPart,
};
pub use pagination::{FileNameCursor, FileVersionCursor, KeyCursor, ListPage, Paginated};
pub use session::Session;
pub use tokens::AuthToken;
pub use traits::{HttpRequest, HttpResponse, Method, Transport};
pub use types::{ApiUrl, BucketType, FileAction};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
