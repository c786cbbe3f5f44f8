//! # filedesk-view
//!
//! Read-only view over a flat collection of file records. The
//! [`FileListViewModel`] filters the collection, groups previous versions
//! under their current record, and tracks which record is expanded and
//! which records are selected. Rendering is left to the caller.

pub mod display;
pub mod grouping;
pub mod options;
pub mod sections;
pub mod state;
pub mod stepper;
pub mod view_model;

#[cfg(test)]
pub(crate) mod test_support;

pub use display::{StatusBadge, StatusIcon, status_badge_class, status_icon};
pub use grouping::{VersionGroup, VersionIndex};
pub use options::{FilterOptions, unique_values};
pub use sections::{SectionTab, SectionTabs};
pub use state::UiState;
pub use stepper::{ProjectStep, ProjectStepper, StepStatus};
pub use view_model::FileListViewModel;
