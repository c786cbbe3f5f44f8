//! Table, tree, and JSON output formatting for CLI commands.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::{Table, Tabled};

use filedesk_entity::file::FileRecord;
use filedesk_view::{FileListViewModel, ProjectStepper, SectionTabs, StatusIcon};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
pub struct FileRow {
    /// Record ID
    id: String,
    /// Version label
    version: String,
    /// Name
    name: String,
    /// File type
    #[tabled(rename = "type")]
    file_type: String,
    /// Uploader
    uploader: String,
    /// Upload time
    uploaded: String,
    /// Status with icon
    status: String,
    /// Comment count
    comments: u32,
    /// Parent record, for previous versions
    parent: String,
}

impl From<&FileRecord> for FileRow {
    fn from(record: &FileRecord) -> Self {
        Self {
            id: record.id.to_string(),
            version: record.version.clone(),
            name: record.name.clone(),
            file_type: record.file_type.clone(),
            uploader: record.uploader.clone(),
            uploaded: format_date(&record.upload_date),
            status: status_label(record),
            comments: record.comment_count,
            parent: record
                .parent_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
        }
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "null".to_string());
    println!("{}", json);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {}", msg);
}

/// Upload time as `29 May 2024, 8:30 PM`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y, %-I:%M %p").to_string()
}

/// Status text prefixed with its icon glyph, if it has one.
pub fn status_label(record: &FileRecord) -> String {
    match StatusIcon::for_status(&record.status) {
        StatusIcon::None => record.status.to_string(),
        icon => format!("{} {}", icon.glyph(), record.status),
    }
}

fn file_line(
    out: &mut String,
    indent: &str,
    marker: &str,
    record: &FileRecord,
    vm: &FileListViewModel,
) {
    let check = if vm.is_selected(record.id.as_str()) {
        "[x]"
    } else {
        "[ ]"
    };
    let comments = if record.has_comments() {
        format!("  💬{}", record.comment_count)
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        "{indent}{marker}{check} {:<3} {}{comments}  ({}) {}  {}  {}",
        record.version,
        record.name,
        record.id,
        record.uploader,
        format_date(&record.upload_date),
        status_label(record),
    );
}

/// Render the version tree as text.
///
/// Expandable roots carry `▸`/`▾`; the children of the expanded root are
/// listed under a "Previous versions" heading, highlighted ones with `★`.
pub fn render_tree(vm: &FileListViewModel) -> String {
    let tree = vm.version_tree();
    let mut out = String::new();
    if tree.is_empty() {
        out.push_str("No results found.\n");
        return out;
    }

    for group in &tree {
        let marker = match (vm.is_expandable(group.root.id.as_str()), group.expanded) {
            (false, _) => "  ",
            (true, false) => "▸ ",
            (true, true) => "▾ ",
        };
        file_line(&mut out, "", marker, group.root, vm);

        if group.expanded {
            out.push_str("    Previous versions\n");
            for child in &group.children {
                let marker = if child.highlighted { "★ " } else { "  " };
                file_line(&mut out, "    ", marker, child, vm);
            }
        }
    }
    out
}

/// Render the project stepper and section tabs as text.
pub fn render_tabs(stepper: &ProjectStepper, tabs: &SectionTabs) -> String {
    let steps: Vec<String> = stepper
        .steps()
        .iter()
        .map(|s| format!("{} {}", s.status.marker(), s.name))
        .collect();

    let sections: Vec<String> = tabs
        .tabs()
        .iter()
        .map(|t| {
            let label = match t.display_count() {
                Some(count) => format!("{} ({count})", t.name),
                None => t.name.clone(),
            };
            if tabs.is_active(&t.id) {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();

    format!("{}\n{}\n", steps.join(" ─ "), sections.join(" | "))
}

/// Text shown in place of the file list for sections without files.
pub fn render_empty_section(tabs: &SectionTabs) -> String {
    format!(
        "No files to display in \"{}\".\nSwitch to \"{}\" to view available files.\n",
        tabs.active().name,
        filedesk_core::config::view::FILES_TAB_NAME
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedesk_core::traits::source::RecordSource;
    use filedesk_core::types::FilterCriteria;
    use filedesk_source::fixture::FixtureSource;
    use filedesk_view::UiState;

    async fn fixture_vm(state: UiState) -> FileListViewModel {
        let records = FixtureSource::new().list_all().await.unwrap();
        FileListViewModel::with_state(records, state)
    }

    #[test]
    fn test_format_date() {
        let date: DateTime<Utc> = "2024-05-29T20:30:00Z".parse().unwrap();
        assert_eq!(format_date(&date), "29 May 2024, 8:30 PM");
    }

    #[tokio::test]
    async fn test_render_tree_expanded() {
        let mut vm = fixture_vm(UiState::expanded_at("file-1")).await;
        vm.toggle_selected("file-3");
        let text = render_tree(&vm);
        assert!(text.contains("▾ [ ] V4  EUPHORIA - GF OPTIONS"));
        assert!(text.contains("Previous versions"));
        assert!(text.contains("    ★ [ ] V1  EUPHORIA - GF OPTIONS"));
        assert!(text.contains("[x] V2  EUPHORIA - GF OPTIONS"));
        assert!(text.contains("  [ ] V1  EUPHORIA - SCHEME PLAN"));
    }

    #[tokio::test]
    async fn test_render_tree_collapsed_hides_children() {
        let vm = fixture_vm(UiState::new()).await;
        let text = render_tree(&vm);
        assert!(text.contains("▸ [ ] V4"));
        assert!(!text.contains("Previous versions"));
        assert!(!text.contains("(file-2)"));
    }

    #[tokio::test]
    async fn test_render_tree_empty() {
        let mut vm = fixture_vm(UiState::new()).await;
        vm.set_filter(FilterCriteria::none().with_status("Draft"));
        assert_eq!(render_tree(&vm), "No results found.\n");
    }

    #[test]
    fn test_render_tabs_marks_active() {
        let mut tabs = SectionTabs::default();
        tabs.activate("GFCs");
        let text = render_tabs(&ProjectStepper::default(), &tabs);
        assert!(text.starts_with("✓ Recce ─ ● Design ─ ○ BOQ"));
        assert!(text.contains("[GFCs (1)]"));
        assert!(text.contains("| Production Files |"));
    }
}
