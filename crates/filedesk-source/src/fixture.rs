//! Built-in sample collection.

use async_trait::async_trait;

use filedesk_core::result::AppResult;
use filedesk_core::traits::source::RecordSource;
use filedesk_entity::file::FileRecord;

const FIXTURE: &str = include_str!("../fixtures/euphoria.json");

/// Serves the bundled "EUPHORIA" project documents.
///
/// `file-1` is the current revision of a document with three previous
/// versions (`file-2` to `file-4`, the last one highlighted as the approved
/// baseline). `file-5` to `file-7` have no history.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource;

impl FixtureSource {
    /// Create the fixture source.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RecordSource<FileRecord> for FixtureSource {
    async fn list_all(&self) -> AppResult<Vec<FileRecord>> {
        crate::parse_records(FIXTURE)
    }

    fn name(&self) -> &str {
        "fixture"
    }
}
