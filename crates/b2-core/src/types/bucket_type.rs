//! Bucket visibility type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The type of a bucket.
///
/// Unrecognised values are kept verbatim in [`BucketType::Unknown`] so that
/// re-encoding a bucket never loses information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BucketType {
    /// Anybody can download files.
    AllPublic,
    /// Downloads require an authorization token.
    #[default]
    AllPrivate,
    /// Bucket holding snapshots.
    Snapshot,
    /// Bucket shared with another account.
    Shared,
    /// Bucket with restricted access.
    Restricted,
    /// A value this client does not know about.
    Unknown(String),
}

impl BucketType {
    pub fn as_str(&self) -> &str {
        match self {
            BucketType::AllPublic => "allPublic",
            BucketType::AllPrivate => "allPrivate",
            BucketType::Snapshot => "snapshot",
            BucketType::Shared => "shared",
            BucketType::Restricted => "restricted",
            BucketType::Unknown(other) => other,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, BucketType::AllPublic)
    }
}

impl From<String> for BucketType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "allPublic" => BucketType::AllPublic,
            "allPrivate" => BucketType::AllPrivate,
            "snapshot" => BucketType::Snapshot,
            "shared" => BucketType::Shared,
            "restricted" => BucketType::Restricted,
            _ => BucketType::Unknown(value),
        }
    }
}

impl From<BucketType> for String {
    fn from(value: BucketType) -> Self {
        match value {
            BucketType::Unknown(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BucketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
