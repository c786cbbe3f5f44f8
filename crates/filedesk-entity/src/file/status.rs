//! Review status of a file record.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Review status of a file record.
///
/// The known statuses form a closed set. Anything else an upstream source
/// sends is kept verbatim in [`FileStatus::Other`] so it can still be
/// displayed and filtered on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileStatus {
    /// Signed off.
    Approved,
    /// Work in progress.
    Draft,
    /// Sent back.
    Rejected,
    /// Looked at, not yet decided.
    Reviewed,
    /// Unrecognized status label.
    Other(String),
}

impl FileStatus {
    /// The known statuses, in display order.
    pub const KNOWN: [FileStatus; 4] = [
        Self::Approved,
        Self::Draft,
        Self::Rejected,
        Self::Reviewed,
    ];

    /// Parse a status label. Matching is case-insensitive and never fails.
    pub fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "approved" => Self::Approved,
            "draft" => Self::Draft,
            "rejected" => Self::Rejected,
            "reviewed" => Self::Reviewed,
            _ => Self::Other(label.to_string()),
        }
    }

    /// The display label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Approved => "Approved",
            Self::Draft => "Draft",
            Self::Rejected => "Rejected",
            Self::Reviewed => "Reviewed",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the known statuses.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for FileStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FileStatus> for String {
    fn from(value: FileStatus) -> Self {
        value.as_str().to_string()
    }
}
