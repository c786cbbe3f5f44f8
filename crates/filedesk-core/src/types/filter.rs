//! Filter criteria applied to the file list.

use serde::{Deserialize, Serialize};

/// User-supplied filter over the file list.
///
/// Every dimension is optional; an absent or empty value places no
/// constraint on that dimension. Dimensions combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the record name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_query: Option<String>,
    /// Exact uploader match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,
    /// Exact status label match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Case-insensitive file type match (e.g. `PDF`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set the name query.
    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = Some(query.into());
        self
    }

    /// Set the uploader constraint.
    pub fn with_uploader(mut self, uploader: impl Into<String>) -> Self {
        self.uploader = Some(uploader.into());
        self
    }

    /// Set the status constraint.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the file type constraint.
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// The name query, if it constrains anything.
    ///
    /// Whitespace-only queries are treated as absent.
    pub fn active_name_query(&self) -> Option<&str> {
        self.name_query.as_deref().filter(|q| !q.trim().is_empty())
    }

    /// The uploader, if it constrains anything.
    pub fn active_uploader(&self) -> Option<&str> {
        non_empty(self.uploader.as_deref())
    }

    /// The status, if it constrains anything.
    pub fn active_status(&self) -> Option<&str> {
        non_empty(self.status.as_deref())
    }

    /// The file type, if it constrains anything.
    pub fn active_file_type(&self) -> Option<&str> {
        non_empty(self.file_type.as_deref())
    }

    /// Whether no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.active_name_query().is_none()
            && self.active_uploader().is_none()
            && self.active_status().is_none()
            && self.active_file_type().is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
