//! Records stored as a JSON array on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use filedesk_core::error::{AppError, ErrorKind};
use filedesk_core::result::AppResult;
use filedesk_core::traits::source::RecordSource;
use filedesk_entity::file::FileRecord;

/// Reads the whole record collection from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// Path to the JSON array.
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource<FileRecord> for JsonFileSource {
    async fn list_all(&self) -> AppResult<Vec<FileRecord>> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read '{}': {e}", self.path.display()),
                e,
            )
        })?;
        debug!(path = %self.path.display(), bytes = raw.len(), "Read record file");

        serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Invalid record file '{}': {e}", self.path.display()),
                e,
            )
        })
    }

    fn name(&self) -> &str {
        "json"
    }
}
