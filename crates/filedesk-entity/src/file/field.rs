//! Record fields that filter option lists can be built from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::FileRecord;

/// A record field with a small, enumerable set of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    /// The uploader display name.
    Uploader,
    /// The status label.
    Status,
    /// The file type label.
    FileType,
}

impl RecordField {
    /// Return the field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uploader => "uploader",
            Self::Status => "status",
            Self::FileType => "file_type",
        }
    }

    /// Read this field from a record as a display string.
    pub fn value_of<'a>(&self, record: &'a FileRecord) -> &'a str {
        match self {
            Self::Uploader => &record.uploader,
            Self::Status => record.status.as_str(),
            Self::FileType => &record.file_type,
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = filedesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uploader" => Ok(Self::Uploader),
            "status" => Ok(Self::Status),
            "file_type" | "filetype" | "type" => Ok(Self::FileType),
            _ => Err(filedesk_core::AppError::validation(format!(
                "Invalid record field: '{s}'. Expected one of: uploader, status, file_type"
            ))),
        }
    }
}
