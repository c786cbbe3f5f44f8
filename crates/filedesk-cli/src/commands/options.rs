//! Filter option lists.

use serde::Serialize;
use tabled::Tabled;

use filedesk_core::config::AppConfig;
use filedesk_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Option display row
#[derive(Debug, Serialize, Tabled)]
struct OptionRow {
    /// Filter name
    filter: &'static str,
    /// Available value
    value: String,
}

/// Execute the options command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let vm = super::load_view_model(config).await?;
    let options = vm.filter_options();

    match format {
        OutputFormat::Json => output::print_json(&options),
        OutputFormat::Table => {
            let rows: Vec<OptionRow> = [
                ("uploader", &options.uploaders),
                ("status", &options.statuses),
                ("file_type", &options.file_types),
            ]
            .into_iter()
            .flat_map(|(filter, values)| {
                values.iter().map(move |value| OptionRow {
                    filter,
                    value: value.clone(),
                })
            })
            .collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}
