//! Shared test helpers for integration tests.

use filedesk_core::traits::source::RecordSource;
use filedesk_entity::file::{FileRecord, FileStatus, RecordId};
use filedesk_source::fixture::FixtureSource;
use filedesk_view::{FileListViewModel, UiState};

/// The bundled fixture collection.
pub async fn fixture_records() -> Vec<FileRecord> {
    FixtureSource::new()
        .list_all()
        .await
        .expect("fixture should parse")
}

/// A view-model over the fixture with the given state.
pub async fn fixture_view(state: UiState) -> FileListViewModel {
    FileListViewModel::with_state(fixture_records().await, state)
}

/// Build a minimal record.
pub fn record(id: &str, name: &str, status: &str, parent: Option<&str>) -> FileRecord {
    FileRecord {
        id: RecordId::new(id),
        name: name.to_string(),
        version: "V1".to_string(),
        file_type: "PDF".to_string(),
        uploader: "System User".to_string(),
        upload_date: "2025-03-13T19:13:00Z".parse().expect("date"),
        status: FileStatus::parse(status),
        comment_count: 0,
        parent_id: parent.map(RecordId::new),
        highlighted: false,
    }
}

/// Ids of a record sequence.
pub fn ids<'a>(records: impl IntoIterator<Item = &'a FileRecord>) -> Vec<String> {
    records.into_iter().map(|r| r.id.to_string()).collect()
}
