//! Filter option lists.

use std::collections::HashSet;

use serde::Serialize;

use filedesk_entity::file::{FileRecord, RecordField};

/// Distinct values of `field` across `records`, in first-seen order.
///
/// Callers pass the unfiltered collection so the option lists never
/// shrink to the current filter.
pub fn unique_values(records: &[FileRecord], field: RecordField) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| field.value_of(r))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Option lists for the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct uploaders.
    pub uploaders: Vec<String>,
    /// Distinct status labels.
    pub statuses: Vec<String>,
    /// Distinct file types.
    pub file_types: Vec<String>,
}

impl FilterOptions {
    /// Collect options from the full record collection.
    pub fn from_records(records: &[FileRecord]) -> Self {
        Self {
            uploaders: unique_values(records, RecordField::Uploader),
            statuses: unique_values(records, RecordField::Status),
            file_types: unique_values(records, RecordField::FileType),
        }
    }
}
