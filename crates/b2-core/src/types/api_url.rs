//! API base URL type.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// API version prefix for every B2 endpoint.
pub const API_PREFIX: &str = "/b2api/v2";

const FILE_NAME_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

const QUERY_VALUE_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a file name for URLs and the `X-Bz-File-Name` header.
///
/// Slashes are kept so that "folders" stay readable.
pub fn encode_file_name(name: &str) -> String {
    utf8_percent_encode(name, &FILE_NAME_ENCODE_SET).to_string()
}

/// Reverse [`encode_file_name`]. Invalid UTF-8 is replaced, not rejected.
pub fn decode_file_name(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

/// Percent-encode a single query string value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, &QUERY_VALUE_ENCODE_SET).to_string()
}

/// A validated B2 base URL (authorization, API or download host).
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for localhost),
/// and is normalized for endpoint construction.
///
/// # Example
///
/// ```
/// use b2_core::ApiUrl;
///
/// let api = ApiUrl::new("https://api001.backblazeb2.com").unwrap();
/// assert_eq!(api.endpoint_url("b2_list_buckets"),
///            "https://api001.backblazeb2.com/b2api/v2/b2_list_buckets");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the URL is not absolute, has no host,
    /// or uses plain HTTP for anything but localhost.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| Error::InvalidUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the URL of an API endpoint, e.g. `b2_list_file_names`.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}/{}", self.base(), API_PREFIX, endpoint)
    }

    /// Returns the download-by-name URL for a file.
    pub fn file_url(&self, bucket_name: &str, file_name: &str) -> String {
        format!(
            "{}/file/{}/{}",
            self.base(),
            bucket_name,
            encode_file_name(file_name)
        )
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    // The url crate always renders a root path as "/"
    fn base(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| Error::InvalidUrl {
            value: original.to_string(),
            reason: reason.to_string(),
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(invalid("must use HTTPS (HTTP allowed only for localhost)"));
        }

        if url.host_str().is_none() {
            return Err(invalid("must have a host"));
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base())
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.base())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}
