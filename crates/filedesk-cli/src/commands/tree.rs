//! Version tree view.

use clap::Args;

use filedesk_core::config::AppConfig;
use filedesk_core::error::AppError;
use filedesk_view::FileListViewModel;

use super::FilterArgs;
use crate::output::{self, OutputFormat};

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Filters applied to current and previous versions alike
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Record whose previous versions are shown (overrides the configured one)
    #[arg(short, long)]
    pub expand: Option<String>,

    /// Collapse every record, ignoring the configured expansion
    #[arg(long, conflicts_with = "expand")]
    pub collapsed: bool,
}

/// Execute the tree command
pub async fn execute(
    args: &TreeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut vm = super::load_view_model(config).await?;
    vm.set_filter(args.filter.to_criteria());

    apply_expansion(&mut vm, args.expand.as_deref(), args.collapsed)?;

    match format {
        OutputFormat::Table => print!("{}", output::render_tree(&vm)),
        OutputFormat::Json => output::print_json(&vm.version_tree()),
    }
    Ok(())
}

/// Re-target the expanded record from the command-line flags.
///
/// `collapsed` clears any expansion; `expand` replaces the configured one.
/// With neither flag the configured expansion is kept as is.
fn apply_expansion(
    vm: &mut FileListViewModel,
    expand: Option<&str>,
    collapsed: bool,
) -> Result<(), AppError> {
    let current = vm.state().expanded().map(|id| id.to_string());
    let target = if collapsed {
        None
    } else {
        expand.or(current.as_deref())
    };
    if target == current.as_deref() {
        return Ok(());
    }

    if let Some(id) = target {
        if vm.record(id).is_none() {
            return Err(AppError::not_found(format!("No file with id '{id}'")));
        }
    }
    if let Some(id) = current.as_deref() {
        vm.toggle_expanded(id);
    }
    if let Some(id) = target {
        vm.toggle_expanded(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedesk_core::error::ErrorKind;

    async fn configured_vm() -> FileListViewModel {
        let mut config = AppConfig::default();
        config.view.initial_expanded = Some("file-1".to_string());
        super::super::load_view_model(&config).await.unwrap()
    }

    #[tokio::test]
    async fn test_expand_overrides_configured() {
        let mut vm = configured_vm().await;
        apply_expansion(&mut vm, Some("file-5"), false).unwrap();
        assert!(vm.is_expanded("file-5"));
        assert!(!vm.is_expanded("file-1"));
    }

    #[tokio::test]
    async fn test_collapsed_clears_expansion() {
        let mut vm = configured_vm().await;
        apply_expansion(&mut vm, None, true).unwrap();
        assert!(vm.state().expanded().is_none());
        assert!(vm.version_tree().iter().all(|g| !g.expanded));
    }

    #[tokio::test]
    async fn test_expand_current_stays_expanded() {
        let mut vm = configured_vm().await;
        apply_expansion(&mut vm, Some("file-1"), false).unwrap();
        assert!(vm.is_expanded("file-1"));

        apply_expansion(&mut vm, None, false).unwrap();
        assert!(vm.is_expanded("file-1"));
    }

    #[tokio::test]
    async fn test_expand_unknown_id_is_not_found() {
        let mut vm = configured_vm().await;
        let err = apply_expansion(&mut vm, Some("file-99"), false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(vm.is_expanded("file-1"));
    }
}
