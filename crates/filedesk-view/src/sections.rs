//! Section tabs of the project document screen.
//!
//! A project's documents are split into sections. Only the files section
//! hosts the file list; every other section renders an empty state.

use serde::Serialize;

use filedesk_core::config::view::FILES_TAB_NAME;

/// One section tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTab {
    /// Stable tab id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Number of documents in the section.
    pub count: usize,
}

impl SectionTab {
    fn new(id: &str, name: &str, count: usize) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            count,
        }
    }

    /// The count badge, hidden for empty sections.
    pub fn display_count(&self) -> Option<usize> {
        (self.count > 0).then_some(self.count)
    }
}

/// Ordered tabs with exactly one active tab.
#[derive(Debug, Clone, Serialize)]
pub struct SectionTabs {
    tabs: Vec<SectionTab>,
    active: usize,
}

impl Default for SectionTabs {
    fn default() -> Self {
        Self {
            tabs: vec![
                SectionTab::new("2d-layout", FILES_TAB_NAME, 7),
                SectionTab::new("3d-layout", "3D Layout / Adaptation", 7),
                SectionTab::new("production", "Production Files", 0),
                SectionTab::new("section-view", "Section View", 1),
                SectionTab::new("plumbing", "Plumbing Section View", 1),
                SectionTab::new("floor-plans", "Floor Plans", 1),
                SectionTab::new("gfcs", "GFCs", 1),
                SectionTab::new("3d-render", "3D - Render", 0),
            ],
            active: 0,
        }
    }
}

impl SectionTabs {
    /// All tabs in display order.
    pub fn tabs(&self) -> &[SectionTab] {
        &self.tabs
    }

    /// The active tab.
    pub fn active(&self) -> &SectionTab {
        &self.tabs[self.active]
    }

    /// Activate the tab with the given display name. Returns `false` and
    /// leaves the active tab unchanged when no tab has that name.
    pub fn activate(&mut self, name: &str) -> bool {
        match self.tabs.iter().position(|t| t.name == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Whether the tab with `id` is active.
    pub fn is_active(&self, id: &str) -> bool {
        self.active().id == id
    }

    /// Whether the active section hosts the file list.
    pub fn shows_files(&self) -> bool {
        self.active().name == FILES_TAB_NAME
    }

    /// Overwrite the count of the files section.
    pub fn set_file_count(&mut self, count: usize) {
        if let Some(tab) = self.tabs.iter_mut().find(|t| t.name == FILES_TAB_NAME) {
            tab.count = count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_tab_active_by_default() {
        let tabs = SectionTabs::default();
        assert!(tabs.shows_files());
        assert!(tabs.is_active("2d-layout"));
    }

    #[test]
    fn test_activate_other_section_hides_files() {
        let mut tabs = SectionTabs::default();
        assert!(tabs.activate("Floor Plans"));
        assert!(!tabs.shows_files());
        assert!(tabs.is_active("floor-plans"));
        assert!(!tabs.activate("Nope"));
        assert!(tabs.is_active("floor-plans"));
    }

    #[test]
    fn test_zero_counts_are_hidden() {
        let mut tabs = SectionTabs::default();
        tabs.set_file_count(0);
        assert_eq!(tabs.tabs()[0].display_count(), None);
        assert_eq!(tabs.tabs()[3].display_count(), Some(1));
    }
}
