//! Project stages and document sections.

use serde_json::json;

use filedesk_core::config::AppConfig;
use filedesk_core::error::AppError;
use filedesk_view::{ProjectStepper, SectionTabs};

use crate::output::{self, OutputFormat};

/// Build the section tabs with the configured tab active.
pub fn configured_tabs(config: &AppConfig) -> Result<SectionTabs, AppError> {
    let mut tabs = SectionTabs::default();
    if !tabs.activate(&config.view.active_tab) {
        return Err(AppError::validation(format!(
            "Unknown section tab: '{}'",
            config.view.active_tab
        )));
    }
    Ok(tabs)
}

/// Execute the tabs command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let stepper = ProjectStepper::default();
    let tabs = configured_tabs(config)?;

    match format {
        OutputFormat::Table => print!("{}", output::render_tabs(&stepper, &tabs)),
        OutputFormat::Json => output::print_json(&json!({
            "steps": stepper,
            "tabs": tabs,
        })),
    }
    Ok(())
}
