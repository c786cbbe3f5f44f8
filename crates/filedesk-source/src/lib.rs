//! # filedesk-source
//!
//! Record source implementations for FileDesk:
//!
//! - **fixture**: the built-in sample collection compiled into the binary
//! - **json**: a JSON array of records read from disk
//!
//! The source is selected at runtime based on configuration.

#[cfg(feature = "fixture")]
pub mod fixture;
#[cfg(feature = "json")]
pub mod json;
pub mod manager;

pub use manager::SourceManager;

use filedesk_core::result::AppResult;
use filedesk_entity::file::FileRecord;

/// Parse a JSON array of records.
pub fn parse_records(raw: &str) -> AppResult<Vec<FileRecord>> {
    Ok(serde_json::from_str(raw)?)
}
