//! File record entity.

use std::borrow::Borrow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::FileStatus;

/// Opaque identifier of a file record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RecordId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One uploaded revision of a document.
///
/// All revisions of a document share `name`. The current revision has no
/// `parent_id`; each previous revision points at the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique record identifier.
    pub id: RecordId,
    /// Display title.
    pub name: String,
    /// Version label such as `V3`. Not ordered by the system.
    pub version: String,
    /// Free-form type label (e.g. `PDF`).
    pub file_type: String,
    /// Display name of the uploader.
    pub uploader: String,
    /// When this revision was uploaded.
    pub upload_date: DateTime<Utc>,
    /// Review status.
    pub status: FileStatus,
    /// Number of comments on this revision.
    #[serde(default, alias = "comments")]
    pub comment_count: u32,
    /// The current revision this one was superseded by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<RecordId>,
    /// Presentational emphasis, e.g. the approved baseline revision.
    #[serde(default, alias = "isHighlighted")]
    pub highlighted: bool,
}

impl FileRecord {
    /// Whether this record is a current (root) revision.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether this record is a previous version of `parent`.
    pub fn is_child_of(&self, parent: &str) -> bool {
        self.parent_id.as_ref().is_some_and(|p| p.as_str() == parent)
    }

    /// First character of the uploader, used for avatar badges.
    pub fn uploader_initial(&self) -> Option<char> {
        self.uploader.chars().next()
    }

    /// Whether a comment counter should be shown.
    pub fn has_comments(&self) -> bool {
        self.comment_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileRecord {
        FileRecord {
            id: RecordId::new("file-2"),
            name: "EUPHORIA - GF OPTIONS".to_string(),
            version: "V3".to_string(),
            file_type: "PDF".to_string(),
            uploader: "Rushal Sohail".to_string(),
            upload_date: "2024-05-29T14:34:00Z".parse().expect("date"),
            status: FileStatus::Approved,
            comment_count: 2,
            parent_id: Some(RecordId::new("file-1")),
            highlighted: false,
        }
    }

    #[test]
    fn test_parent_relationship() {
        let record = sample();
        assert!(!record.is_root());
        assert!(record.is_child_of("file-1"));
        assert!(!record.is_child_of("file-5"));
    }

    #[test]
    fn test_row_helpers() {
        let mut record = sample();
        assert_eq!(record.uploader_initial(), Some('R'));
        assert!(record.has_comments());
        record.uploader.clear();
        record.comment_count = 0;
        assert_eq!(record.uploader_initial(), None);
        assert!(!record.has_comments());
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": "file-4",
            "type": "file",
            "version": "V1",
            "name": "EUPHORIA - GF OPTIONS",
            "fileType": "PDF",
            "uploader": "Akash Parwani",
            "uploadDate": "2024-05-21T19:09:00Z",
            "status": "Approved",
            "comments": 0,
            "parentId": "file-1",
            "isHighlighted": true
        }"#;
        let record: FileRecord = serde_json::from_str(json).expect("deserialize");
        assert_eq!(record.id.as_str(), "file-4");
        assert_eq!(record.parent_id, Some(RecordId::new("file-1")));
        assert!(record.highlighted);
        assert_eq!(record.status, FileStatus::Approved);
    }
}
