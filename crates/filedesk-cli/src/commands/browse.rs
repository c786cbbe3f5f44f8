//! Interactive browsing session.
//!
//! One view-model lives for the whole session, so filters, the expanded
//! record, and the selection carry over between actions.

use dialoguer::{Input, Select};

use filedesk_core::config::AppConfig;
use filedesk_core::error::AppError;
use filedesk_core::types::FilterCriteria;
use filedesk_entity::file::RecordField;
use filedesk_view::{FileListViewModel, ProjectStepper, SectionTabs, unique_values};

use crate::output;

const ACTIONS: [&str; 9] = [
    "Search by name",
    "Filter by uploader",
    "Filter by status",
    "Filter by file type",
    "Clear filters",
    "Show or hide previous versions",
    "Select or deselect a file",
    "Switch section",
    "Quit",
];

/// Execute the browse command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let mut vm = super::load_view_model(config).await?;
    let stepper = ProjectStepper::default();
    let mut tabs = super::tabs::configured_tabs(config)?;
    tabs.set_file_count(vm.total_count());

    loop {
        print!("\n{}", output::render_tabs(&stepper, &tabs));
        if tabs.shows_files() {
            println!("\n{}", summary(&vm));
            print!("{}", output::render_tree(&vm));
        } else {
            print!("\n{}", output::render_empty_section(&tabs));
        }

        let action = Select::new()
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact()
            .map_err(input_error)?;

        match ACTIONS[action] {
            "Search by name" => {
                let query: String = Input::new()
                    .with_prompt("Name of file contains (empty for any)")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(input_error)?;
                let criteria = FilterCriteria {
                    name_query: Some(query),
                    ..vm.filter().clone()
                };
                vm.set_filter(criteria);
            }
            "Filter by uploader" => {
                let uploader = pick_option(&vm, RecordField::Uploader, "All Uploaders")?;
                let criteria = FilterCriteria {
                    uploader,
                    ..vm.filter().clone()
                };
                vm.set_filter(criteria);
            }
            "Filter by status" => {
                let status = pick_option(&vm, RecordField::Status, "All Statuses")?;
                let criteria = FilterCriteria {
                    status,
                    ..vm.filter().clone()
                };
                vm.set_filter(criteria);
            }
            "Filter by file type" => {
                let file_type = pick_option(&vm, RecordField::FileType, "All Types")?;
                let criteria = FilterCriteria {
                    file_type,
                    ..vm.filter().clone()
                };
                vm.set_filter(criteria);
            }
            "Clear filters" => vm.set_filter(FilterCriteria::none()),
            "Show or hide previous versions" => toggle_versions(&mut vm)?,
            "Select or deselect a file" => toggle_selection(&mut vm)?,
            "Switch section" => switch_section(&mut tabs)?,
            _ => break,
        }
    }

    output::print_success(&format!(
        "{} file(s) selected ({} hidden by filters)",
        vm.selected_ids().len(),
        hidden_selection_count(&vm)
    ));
    Ok(())
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}

/// One-line description of the list header.
fn summary(vm: &FileListViewModel) -> String {
    let visible = vm.visible_records().len();
    let selected = vm.visible_selection().len();
    let mut line = format!(
        "{} Files ({} shown, {} selected)",
        vm.total_count(),
        visible,
        selected
    );
    if !vm.filter().is_empty() {
        line.push_str(" [filtered]");
    }
    line
}

/// Selected ids the current filter keeps off screen.
///
/// Selected ids that name no record count as neither visible nor hidden
/// rows, so the difference can never go below zero.
fn hidden_selection_count(vm: &FileListViewModel) -> usize {
    vm.selected_ids()
        .len()
        .saturating_sub(vm.visible_selection().len())
}

/// Offer the unfiltered option list for `field`, plus an "all" entry.
fn pick_option(
    vm: &FileListViewModel,
    field: RecordField,
    all_label: &str,
) -> Result<Option<String>, AppError> {
    let values = unique_values(vm.records(), field);
    let mut items = vec![all_label.to_string()];
    items.extend(values.iter().cloned());

    let choice = Select::new()
        .with_prompt(format!("Filter by {field}"))
        .items(&items)
        .default(0)
        .interact()
        .map_err(input_error)?;

    Ok(choice.checked_sub(1).map(|i| values[i].clone()))
}

fn toggle_versions(vm: &mut FileListViewModel) -> Result<(), AppError> {
    let candidates: Vec<(String, String)> = vm
        .root_records()
        .into_iter()
        .filter(|r| vm.is_expandable(r.id.as_str()))
        .map(|r| (r.id.to_string(), format!("{} {} ({})", r.version, r.name, r.id)))
        .collect();

    if candidates.is_empty() {
        output::print_warning("No visible file has previous versions");
        return Ok(());
    }

    let labels: Vec<&str> = candidates.iter().map(|(_, l)| l.as_str()).collect();
    let choice = Select::new()
        .with_prompt("File")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(input_error)?;

    vm.toggle_expanded(&candidates[choice].0);
    Ok(())
}

/// Offer every row currently on screen: visible roots and the visible
/// children of the expanded root.
fn toggle_selection(vm: &mut FileListViewModel) -> Result<(), AppError> {
    let candidates: Vec<(String, String)> = vm
        .version_tree()
        .iter()
        .flat_map(|group| {
            let children = if group.expanded {
                group.children.clone()
            } else {
                Vec::new()
            };
            std::iter::once(group.root).chain(children)
        })
        .map(|r| {
            let mark = if vm.is_selected(r.id.as_str()) { "[x]" } else { "[ ]" };
            (
                r.id.to_string(),
                format!("{mark} {} {} ({})", r.version, r.name, r.id),
            )
        })
        .collect();

    if candidates.is_empty() {
        output::print_warning("No files to select");
        return Ok(());
    }

    let labels: Vec<&str> = candidates.iter().map(|(_, l)| l.as_str()).collect();
    let choice = Select::new()
        .with_prompt("File")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(input_error)?;

    vm.toggle_selected(&candidates[choice].0);
    Ok(())
}

fn switch_section(tabs: &mut SectionTabs) -> Result<(), AppError> {
    let names: Vec<&str> = tabs.tabs().iter().map(|t| t.name.as_str()).collect();
    let current = names
        .iter()
        .position(|n| *n == tabs.active().name)
        .unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Section")
        .items(&names)
        .default(current)
        .interact()
        .map_err(input_error)?;

    let name = names[choice].to_string();
    tabs.activate(&name);
    Ok(())
}
