//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from an optional
//! TOML file overlaid with `FILEDESK__*` environment variables. Every
//! section has defaults, so running without a file is valid.

pub mod logging;
pub mod source;
pub mod view;

use serde::{Deserialize, Serialize};

use self::logging::LoggingConfig;
use self::source::SourceConfig;
use self::view::ViewConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where file records are loaded from.
    #[serde(default)]
    pub source: SourceConfig,
    /// Initial view state.
    #[serde(default)]
    pub view: ViewConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (if present) and environment
    /// variables prefixed with `FILEDESK`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("FILEDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
