//! Source manager that dispatches to the configured record source.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use filedesk_core::config::source::{SourceConfig, SourceKind};
use filedesk_core::error::AppError;
use filedesk_core::result::AppResult;
use filedesk_core::traits::source::RecordSource;
use filedesk_entity::file::FileRecord;

/// Wraps the record source selected by configuration.
#[derive(Clone)]
pub struct SourceManager {
    /// The inner record source.
    inner: Arc<dyn RecordSource<FileRecord>>,
}

impl std::fmt::Debug for SourceManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceManager")
            .field("source", &self.inner.name())
            .finish()
    }
}

impl SourceManager {
    /// Create a source manager from configuration.
    pub fn new(config: &SourceConfig) -> AppResult<Self> {
        let inner: Arc<dyn RecordSource<FileRecord>> = match config.kind {
            #[cfg(feature = "fixture")]
            SourceKind::Fixture => {
                info!("Using built-in fixture records");
                Arc::new(crate::fixture::FixtureSource::new())
            }
            #[cfg(feature = "json")]
            SourceKind::Json => {
                let path = config.path.as_deref().ok_or_else(|| {
                    AppError::configuration("source.path is required when source.kind = \"json\"")
                })?;
                info!(path, "Using JSON record file");
                Arc::new(crate::json::JsonFileSource::new(path))
            }
            #[allow(unreachable_patterns)]
            other => {
                return Err(AppError::configuration(format!(
                    "Record source '{other:?}' is not compiled in"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a source manager from an existing source (for testing).
    pub fn from_source(source: Arc<dyn RecordSource<FileRecord>>) -> Self {
        Self { inner: source }
    }
}

#[async_trait]
impl RecordSource<FileRecord> for SourceManager {
    async fn list_all(&self) -> AppResult<Vec<FileRecord>> {
        let records = self.inner.list_all().await?;
        info!(source = self.inner.name(), count = records.len(), "Loaded records");
        Ok(records)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedesk_core::error::ErrorKind;

    #[tokio::test]
    async fn test_default_config_uses_fixture() {
        let manager = SourceManager::new(&SourceConfig::default()).unwrap();
        assert_eq!(manager.name(), "fixture");
        assert_eq!(manager.list_all().await.unwrap().len(), 7);
    }

    #[test]
    fn test_json_without_path_is_rejected() {
        let config = SourceConfig {
            kind: SourceKind::Json,
            path: None,
        };
        let err = SourceManager::new(&config).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
