//! Listing responses and their conversion into pages.

use serde::{Deserialize, Serialize};

use super::{ApplicationKey, Bucket, File};
use crate::pagination::{FileNameCursor, FileVersionCursor, KeyCursor, ListPage};

/// Response of `b2_list_file_names` and `b2_list_file_versions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesResponse {
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub next_file_name: Option<String>,
    #[serde(default)]
    pub next_file_id: Option<String>,
}

impl ListFilesResponse {
    /// Page of a name listing. The cursor is the next file name.
    pub fn into_name_page(self) -> ListPage<File, FileNameCursor> {
        ListPage {
            items: self.files,
            next_cursor: self.next_file_name.map(FileNameCursor::new),
        }
    }

    /// Page of a version listing. The cursor is the next name and id.
    ///
    /// Both must be carried together: names repeat across versions.
    pub fn into_version_page(self) -> ListPage<File, FileVersionCursor> {
        let next_file_id = self.next_file_id;
        ListPage {
            items: self.files,
            next_cursor: self
                .next_file_name
                .map(|name| FileVersionCursor::new(name, next_file_id)),
        }
    }
}

/// Response of `b2_list_keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListKeysResponse {
    #[serde(default)]
    pub keys: Vec<ApplicationKey>,
    #[serde(default)]
    pub next_application_key_id: Option<String>,
}

impl ListKeysResponse {
    pub fn into_page(self) -> ListPage<ApplicationKey, KeyCursor> {
        ListPage {
            items: self.keys,
            next_cursor: self.next_application_key_id.map(KeyCursor::new),
        }
    }
}

/// Response of `b2_list_buckets`. Never paginated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBucketsResponse {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}
