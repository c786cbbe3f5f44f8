//! Initial view state configuration.

use serde::{Deserialize, Serialize};

/// Name of the section tab that hosts the file list.
pub const FILES_TAB_NAME: &str = "2D Layout / Adaptation";

/// View settings applied when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Record id expanded when the session starts.
    #[serde(default)]
    pub initial_expanded: Option<String>,
    /// Section tab active when the session starts.
    #[serde(default = "default_active_tab")]
    pub active_tab: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_expanded: None,
            active_tab: default_active_tab(),
        }
    }
}

fn default_active_tab() -> String {
    FILES_TAB_NAME.to_string()
}
