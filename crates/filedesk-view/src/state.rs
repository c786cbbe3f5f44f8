//! Transient UI state: the expanded record and the selection set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use filedesk_entity::file::RecordId;

/// Session-local UI state owned by the caller.
///
/// Holds at most one expanded record and a set of selected record ids.
/// Neither is checked against the record collection: unknown ids are
/// stored like any other and simply never match a rendered row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    expanded: Option<RecordId>,
    selected: BTreeSet<RecordId>,
}

impl UiState {
    /// Empty state: nothing expanded, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with `id` already expanded.
    pub fn expanded_at(id: impl Into<RecordId>) -> Self {
        Self {
            expanded: Some(id.into()),
            selected: BTreeSet::new(),
        }
    }

    /// Collapse `id` if it is expanded, otherwise expand it (collapsing
    /// whatever was open before).
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(RecordId::new(id));
        }
    }

    /// Flip membership of `id` in the selection set.
    pub fn toggle_selected(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(RecordId::new(id));
        }
    }

    /// Whether `id` is the expanded record.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_ref().is_some_and(|e| e.as_str() == id)
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// The expanded record, if any.
    pub fn expanded(&self) -> Option<&RecordId> {
        self.expanded.as_ref()
    }

    /// Every selected id, in id order.
    pub fn selected(&self) -> impl Iterator<Item = &RecordId> {
        self.selected.iter()
    }

    /// Number of selected ids.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Drop the whole selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }
}
