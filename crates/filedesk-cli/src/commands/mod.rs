//! CLI command definitions and dispatch.

pub mod browse;
pub mod list;
pub mod options;
pub mod tabs;
pub mod tree;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use filedesk_core::config::AppConfig;
use filedesk_core::error::AppError;
use filedesk_core::traits::source::RecordSource;
use filedesk_core::types::FilterCriteria;
use filedesk_source::SourceManager;
use filedesk_view::{FileListViewModel, UiState};

use crate::output::OutputFormat;

/// FileDesk — browse project files and their version history
#[derive(Debug, Parser)]
#[command(name = "filedesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List files matching the filters
    List(FilterArgs),
    /// Show current files with their previous versions
    Tree(tree::TreeArgs),
    /// Show the values available to each filter
    Options,
    /// Show project stages and document sections
    Tabs,
    /// Browse files interactively
    Browse,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        debug!(command = ?self.command, format = ?self.format, "Dispatching command");
        match &self.command {
            Commands::List(args) => list::execute(args, config, self.format).await,
            Commands::Tree(args) => tree::execute(args, config, self.format).await,
            Commands::Options => options::execute(config, self.format).await,
            Commands::Tabs => tabs::execute(config, self.format),
            Commands::Browse => browse::execute(config).await,
        }
    }
}

/// Filter flags shared by listing commands
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive substring of the file name
    #[arg(short, long)]
    pub name: Option<String>,
    /// Exact uploader
    #[arg(short, long)]
    pub uploader: Option<String>,
    /// Exact status (Approved, Draft, Rejected, Reviewed, ...)
    #[arg(short, long)]
    pub status: Option<String>,
    /// File type (PDF, DWG, ...)
    #[arg(short = 't', long)]
    pub file_type: Option<String>,
}

impl FilterArgs {
    /// Convert the flags into filter criteria.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            name_query: self.name.clone(),
            uploader: self.uploader.clone(),
            status: self.status.clone(),
            file_type: self.file_type.clone(),
        }
    }
}

/// Helper: load records from the configured source into a view-model
pub async fn load_view_model(config: &AppConfig) -> Result<FileListViewModel, AppError> {
    let source = SourceManager::new(&config.source)?;
    let records = source.list_all().await?;

    let state = match &config.view.initial_expanded {
        Some(id) => UiState::expanded_at(id.as_str()),
        None => UiState::new(),
    };

    Ok(FileListViewModel::with_state(records, state))
}
