//! Flat file listing.

use filedesk_core::config::AppConfig;
use filedesk_core::error::AppError;

use super::FilterArgs;
use crate::output::{self, FileRow, OutputFormat};

/// Execute the list command
pub async fn execute(
    args: &FilterArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut vm = super::load_view_model(config).await?;
    vm.set_filter(args.to_criteria());

    let rows: Vec<FileRow> = vm
        .visible_records()
        .into_iter()
        .map(FileRow::from)
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
