//! Upstream record source abstraction.

use async_trait::async_trait;

use crate::result::AppResult;

/// A capability that yields the full record collection.
///
/// The source is opaque to its consumers: the view-model neither retries
/// nor caches on its behalf. Implementations decide whether a call hits
/// a fixture, the filesystem, or a remote backend.
#[async_trait]
pub trait RecordSource<Record>: Send + Sync + 'static
where
    Record: Send + Sync + 'static,
{
    /// Fetch every record, in the order the caller should display them.
    async fn list_all(&self) -> AppResult<Vec<Record>>;

    /// Short human-readable label for logging.
    fn name(&self) -> &str;
}
