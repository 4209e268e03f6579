//! File listing action.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a listing entry represents.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileAction {
    /// A large file that has been started but not finished.
    Start,
    /// A regular uploaded file version.
    Upload,
    /// A hide marker.
    Hide,
    /// A pseudo-directory produced by a delimiter listing.
    Folder,
    /// A file created by a server-side copy.
    Copy,
    /// A value this client does not know about.
    Unknown(String),
}

impl FileAction {
    pub fn as_str(&self) -> &str {
        match self {
            FileAction::Start => "start",
            FileAction::Upload => "upload",
            FileAction::Hide => "hide",
            FileAction::Folder => "folder",
            FileAction::Copy => "copy",
            FileAction::Unknown(other) => other,
        }
    }
}

impl From<String> for FileAction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "start" => FileAction::Start,
            "upload" => FileAction::Upload,
            "hide" => FileAction::Hide,
            "folder" => FileAction::Folder,
            "copy" => FileAction::Copy,
            _ => FileAction::Unknown(value),
        }
    }
}

impl From<FileAction> for String {
    fn from(value: FileAction) -> Self {
        match value {
            FileAction::Unknown(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
