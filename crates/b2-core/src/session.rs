//! Authorized account session.

use std::fmt;

use serde::Deserialize;

use crate::tokens::AuthToken;
use crate::types::ApiUrl;

/// Absolute minimum size of every large-file part except the last.
pub const MINIMUM_PART_SIZE: u64 = 5 * 1000 * 1000;

/// Part size used when neither configuration nor the server suggests one.
pub const DEFAULT_PART_SIZE: u64 = 100 * 1000 * 1000;

/// What an application key is allowed to do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowed {
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub bucket_id: Option<String>,
    #[serde(default)]
    pub bucket_name: Option<String>,
    #[serde(default)]
    pub name_prefix: Option<String>,
}

/// The result of account authorization.
///
/// Decoded directly from the `b2_authorize_account` response, so a session
/// either exists with every field populated or does not exist at all.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub account_id: String,

    #[serde(rename = "authorizationToken")]
    pub token: AuthToken,

    pub api_url: ApiUrl,

    pub download_url: ApiUrl,

    #[serde(default)]
    pub recommended_part_size: Option<u64>,

    #[serde(default)]
    pub absolute_minimum_part_size: Option<u64>,

    #[serde(default)]
    pub allowed: Option<Allowed>,
}

impl Session {
    /// Part size for large-file uploads: the configured override, then the
    /// server's recommendation, then [`DEFAULT_PART_SIZE`].
    ///
    /// Never below the server's absolute minimum.
    pub fn part_size(&self, configured: Option<u64>) -> u64 {
        let minimum = self.absolute_minimum_part_size.unwrap_or(MINIMUM_PART_SIZE);
        configured
            .or(self.recommended_part_size)
            .unwrap_or(DEFAULT_PART_SIZE)
            .max(minimum)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account_id", &self.account_id)
            .field("token", &self.token)
            .field("api_url", &self.api_url)
            .field("download_url", &self.download_url)
            .field("recommended_part_size", &self.recommended_part_size)
            .finish_non_exhaustive()
    }
}
