//! Status badge and icon mapping.
//!
//! Both mappings are total: any status, including labels outside the
//! known set, maps to a badge and an icon. Unknown statuses get the
//! default badge and no icon.

use serde::Serialize;

use filedesk_entity::file::FileStatus;

/// Badge style for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBadge {
    Approved,
    Draft,
    Rejected,
    Reviewed,
    Default,
}

impl StatusBadge {
    /// Badge for a status.
    pub fn for_status(status: &FileStatus) -> Self {
        match status {
            FileStatus::Approved => Self::Approved,
            FileStatus::Draft => Self::Draft,
            FileStatus::Rejected => Self::Rejected,
            FileStatus::Reviewed => Self::Reviewed,
            FileStatus::Other(_) => Self::Default,
        }
    }

    /// CSS class name of the badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Approved => "status-badge-approved",
            Self::Draft => "status-badge-draft",
            Self::Rejected => "status-badge-rejected",
            Self::Reviewed => "status-badge-reviewed",
            Self::Default => "status-badge-default",
        }
    }
}

/// Icon shown next to a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusIcon {
    CheckCircle,
    Clock,
    XCircle,
    Eye,
    /// No icon.
    None,
}

impl StatusIcon {
    /// Icon for a status.
    pub fn for_status(status: &FileStatus) -> Self {
        match status {
            FileStatus::Approved => Self::CheckCircle,
            FileStatus::Draft => Self::Clock,
            FileStatus::Rejected => Self::XCircle,
            FileStatus::Reviewed => Self::Eye,
            FileStatus::Other(_) => Self::None,
        }
    }

    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::CheckCircle => "✓",
            Self::Clock => "◷",
            Self::XCircle => "✗",
            Self::Eye => "◉",
            Self::None => "",
        }
    }
}

/// Badge CSS class for a raw status label.
pub fn status_badge_class(label: &str) -> &'static str {
    StatusBadge::for_status(&FileStatus::parse(label)).css_class()
}

/// Icon for a raw status label.
pub fn status_icon(label: &str) -> StatusIcon {
    StatusIcon::for_status(&FileStatus::parse(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert_eq!(status_badge_class("Approved"), "status-badge-approved");
        assert_eq!(status_badge_class("draft"), "status-badge-draft");
        assert_eq!(status_icon("Rejected"), StatusIcon::XCircle);
        assert_eq!(status_icon("REVIEWED"), StatusIcon::Eye);
    }

    #[test]
    fn test_unknown_statuses_get_defaults() {
        for label in ["", "Archived", "on hold", "✓"] {
            assert_eq!(status_badge_class(label), "status-badge-default");
            assert_eq!(status_icon(label), StatusIcon::None);
            assert_eq!(status_icon(label).glyph(), "");
        }
    }

    #[test]
    fn test_every_known_status_has_icon() {
        for status in FileStatus::KNOWN {
            assert_ne!(StatusIcon::for_status(&status), StatusIcon::None);
            assert_ne!(StatusBadge::for_status(&status), StatusBadge::Default);
        }
    }
}
