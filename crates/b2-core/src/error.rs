//! Error types for the b2 client.
//!
//! This module provides a unified error type with explicit variants for
//! transport failures, classified API errors, authorization failures and
//! local argument validation.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// The unified error type for b2 operations.
///
/// Every failure is returned to the immediate caller. Nothing in the library
/// retries or recovers on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, malformed HTTP).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server rejected a request.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The account authorization call was rejected.
    ///
    /// The session stays uninitialized; the next call authorizes again.
    #[error("authorization failed: {0}")]
    AuthorizationFailed(ApiError),

    /// Arguments were rejected before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not supported by this client.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// A request or response body could not be encoded or decoded.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// A configured or server-supplied URL is unusable.
    #[error("invalid URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },
}

impl Error {
    /// Returns the API error kind, if this is a classified server error.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            Error::Api(err) | Error::AuthorizationFailed(err) => Some(err.kind),
            _ => None,
        }
    }

    /// Check if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::NotFound)
    }

    /// Check if the authorization token has expired.
    ///
    /// Callers that see this can call `authorize_account` and try again.
    pub fn is_expired_token(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::ExpiredToken)
    }

    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The request could not be built or sent.
    #[error("invalid request: {message}")]
    Request { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// The kind of a classified API error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    BadRequest,
    BadAuthToken,
    ExpiredToken,
    Unauthorized,
    Unsupported,
    AccessForbidden,
    NotFound,
    RequestTimeout,
    TooManyRequests,
    InternalError,
    ServiceUnavailable,
    /// Any other failure status.
    Other,
}

impl ApiErrorKind {
    /// Classify a response by HTTP status and B2 error code.
    ///
    /// Returns `None` for statuses below 400. A 401 with an unrecognised
    /// code is reported as [`ApiErrorKind::Unauthorized`].
    pub fn classify(status: u16, code: Option<&str>) -> Option<Self> {
        let kind = match status {
            0..=399 => return None,
            400 => ApiErrorKind::BadRequest,
            401 => match code {
                Some("bad_auth_token") => ApiErrorKind::BadAuthToken,
                Some("expired_auth_token") => ApiErrorKind::ExpiredToken,
                Some("unsupported") => ApiErrorKind::Unsupported,
                _ => ApiErrorKind::Unauthorized,
            },
            403 => ApiErrorKind::AccessForbidden,
            404 => ApiErrorKind::NotFound,
            408 => ApiErrorKind::RequestTimeout,
            429 => ApiErrorKind::TooManyRequests,
            500 => ApiErrorKind::InternalError,
            503 => ApiErrorKind::ServiceUnavailable,
            _ => ApiErrorKind::Other,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiErrorKind::BadRequest => "bad request",
            ApiErrorKind::BadAuthToken => "bad auth token",
            ApiErrorKind::ExpiredToken => "expired auth token",
            ApiErrorKind::Unauthorized => "unauthorized",
            ApiErrorKind::Unsupported => "unsupported",
            ApiErrorKind::AccessForbidden => "access forbidden",
            ApiErrorKind::NotFound => "not found",
            ApiErrorKind::RequestTimeout => "request timeout",
            ApiErrorKind::TooManyRequests => "too many requests",
            ApiErrorKind::InternalError => "internal error",
            ApiErrorKind::ServiceUnavailable => "service unavailable",
            ApiErrorKind::Other => "API error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified error response from the B2 API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The classified kind.
    pub kind: ApiErrorKind,
    /// HTTP status reported by the server.
    pub status: u16,
    /// B2 error code, e.g. `expired_auth_token`.
    pub code: Option<String>,
    /// Error message from the server.
    pub message: String,
}

/// B2 error body format.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status: Option<u16>,
    code: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Create a new API error, classifying it from status and code.
    ///
    /// Statuses below 400 fall back to [`ApiErrorKind::Other`]; use
    /// [`ApiError::from_response`] to skip successful responses.
    pub fn new(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        let kind = ApiErrorKind::classify(status, code.as_deref()).unwrap_or(ApiErrorKind::Other);
        Self {
            kind,
            status,
            code,
            message: message.into(),
        }
    }

    /// Build a "not found" error for lookups resolved on the client side.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::NotFound,
            status: 404,
            code: Some("not_found".to_string()),
            message: message.into(),
        }
    }

    /// Classify a raw response. Returns `None` when the status is below 400.
    ///
    /// The JSON body's `status` and `code` take precedence; a body that is
    /// empty or not JSON falls back to the HTTP status with the raw text as
    /// the message.
    pub fn from_response(http_status: u16, body: &[u8]) -> Option<Self> {
        ApiErrorKind::classify(http_status, None)?;

        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => {
                let status = parsed.status.unwrap_or(http_status);
                let message = parsed.message.unwrap_or_default();
                Some(Self::new(status, parsed.code, message))
            }
            Err(_) => {
                let message = String::from_utf8_lossy(body).trim().to_string();
                Some(Self::new(http_status, None, message))
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} {}", self.status, self.kind)?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
