use filedesk_entity::file::{FileRecord, FileStatus, RecordId};

/// Build a record with the fields the view-model cares about.
pub fn record(id: &str, name: &str, status: &str, parent: Option<&str>) -> FileRecord {
    FileRecord {
        id: RecordId::new(id),
        name: name.to_string(),
        version: "V1".to_string(),
        file_type: "PDF".to_string(),
        uploader: "Akash Parwani".to_string(),
        upload_date: "2024-05-21T19:09:00Z".parse().expect("date"),
        status: FileStatus::parse(status),
        comment_count: 0,
        parent_id: parent.map(RecordId::new),
        highlighted: false,
    }
}

pub fn ids<'a>(records: impl IntoIterator<Item = &'a FileRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.id.as_str()).collect()
}
