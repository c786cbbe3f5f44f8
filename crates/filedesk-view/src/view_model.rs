//! The file list view-model.

use std::collections::HashSet;

use tracing::{debug, warn};

use filedesk_core::types::FilterCriteria;
use filedesk_entity::file::{FileRecord, RecordId};

use crate::grouping::{VersionGroup, VersionIndex, dangling_children};
use crate::options::FilterOptions;
use crate::state::UiState;

/// Filtered, version-grouped view over a record collection.
///
/// The collection is read-only. The only mutable parts are the filter
/// criteria and the injected [`UiState`]; every query reflects the latest
/// mutation.
#[derive(Debug, Clone)]
pub struct FileListViewModel {
    records: Vec<FileRecord>,
    criteria: FilterCriteria,
    state: UiState,
    /// Ids that have at least one child anywhere in the collection.
    parents: HashSet<RecordId>,
}

impl FileListViewModel {
    /// Create a view-model with empty UI state.
    pub fn new(records: Vec<FileRecord>) -> Self {
        Self::with_state(records, UiState::new())
    }

    /// Create a view-model over `records` using caller-owned `state`.
    pub fn with_state(records: Vec<FileRecord>, state: UiState) -> Self {
        let orphans = dangling_children(&records);
        if !orphans.is_empty() {
            let ids: Vec<&str> = orphans.iter().map(|r| r.id.as_str()).collect();
            warn!(?ids, "Records reference a missing parent and will not be shown");
        }

        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let parents = records
            .iter()
            .filter_map(|r| r.parent_id.as_ref())
            .filter(|p| ids.contains(p.as_str()))
            .cloned()
            .collect();

        Self {
            records,
            criteria: FilterCriteria::default(),
            state,
            parents,
        }
    }

    /// Replace the filter criteria.
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        debug!(?criteria, "Filter updated");
        self.criteria = criteria;
    }

    /// The active filter criteria.
    pub fn filter(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Records that satisfy every active criterion, in collection order.
    pub fn visible_records(&self) -> Vec<&FileRecord> {
        let name_query = self.criteria.active_name_query().map(str::to_lowercase);
        let uploader = self.criteria.active_uploader();
        let status = self.criteria.active_status();
        let file_type = self.criteria.active_file_type();

        self.records
            .iter()
            .filter(|r| {
                name_query
                    .as_deref()
                    .is_none_or(|q| r.name.to_lowercase().contains(q))
            })
            .filter(|r| uploader.is_none_or(|u| r.uploader == u))
            .filter(|r| status.is_none_or(|s| r.status.as_str() == s))
            .filter(|r| file_type.is_none_or(|t| r.file_type.eq_ignore_ascii_case(t)))
            .collect()
    }

    /// Visible records that have no parent.
    pub fn root_records(&self) -> Vec<&FileRecord> {
        self.visible_records()
            .into_iter()
            .filter(|r| r.is_root())
            .collect()
    }

    /// Visible records whose parent is `parent_id`, in collection order.
    ///
    /// Children are filtered with the same criteria as roots, so this can
    /// return records for a parent that is itself filtered out.
    pub fn child_records_of(&self, parent_id: &str) -> Vec<&FileRecord> {
        self.visible_records()
            .into_iter()
            .filter(|r| r.is_child_of(parent_id))
            .collect()
    }

    /// Visible roots with their visible children, grouped in one pass.
    pub fn version_tree(&self) -> Vec<VersionGroup<'_>> {
        let index = VersionIndex::build(self.visible_records());
        index
            .roots()
            .iter()
            .map(|&root| VersionGroup {
                root,
                children: index.children_of(root.id.as_str()).to_vec(),
                expanded: self.state.is_expanded(root.id.as_str()),
            })
            .collect()
    }

    /// Whether `id` has any previous version in the collection.
    pub fn is_expandable(&self, id: &str) -> bool {
        self.parents.contains(id)
    }

    /// Expand `id`, or collapse it if it is already expanded.
    pub fn toggle_expanded(&mut self, id: &str) {
        self.state.toggle_expanded(id);
        debug!(id, expanded = self.state.is_expanded(id), "Toggled expansion");
    }

    /// Add `id` to the selection, or remove it if present.
    pub fn toggle_selected(&mut self, id: &str) {
        self.state.toggle_selected(id);
        debug!(id, selected = self.state.is_selected(id), "Toggled selection");
    }

    /// Whether `id` is the expanded record.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.is_expanded(id)
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.state.is_selected(id)
    }

    /// Every selected id, including ids currently filtered out of view.
    pub fn selected_ids(&self) -> Vec<&RecordId> {
        self.state.selected().collect()
    }

    /// Selected records that pass the active filter, in collection order.
    pub fn visible_selection(&self) -> Vec<&FileRecord> {
        self.visible_records()
            .into_iter()
            .filter(|r| self.state.is_selected(r.id.as_str()))
            .collect()
    }

    /// Option lists built from the unfiltered collection.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }

    /// The full, unfiltered collection.
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Look up a record by id, ignoring the filter.
    pub fn record(&self, id: &str) -> Option<&FileRecord> {
        self.records.iter().find(|r| r.id.as_str() == id)
    }

    /// Number of records in the collection.
    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    /// The UI state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Hand the UI state back to the caller.
    pub fn into_state(self) -> UiState {
        self.state
    }
}
