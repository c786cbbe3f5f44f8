//! Record source configuration.

use serde::{Deserialize, Serialize};

/// Which record source backs the file list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The built-in fixture collection.
    #[default]
    Fixture,
    /// A JSON array of records on disk.
    Json,
}

/// Record source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source backend.
    #[serde(default)]
    pub kind: SourceKind,
    /// Path to the JSON file (required when `kind = "json"`).
    #[serde(default)]
    pub path: Option<String>,
}
