//! Parent/child version grouping.
//!
//! A single pass over a record sequence buckets every child under its
//! parent id, so looking up the previous versions of a root is a map
//! lookup instead of a rescan of the whole collection.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use filedesk_entity::file::FileRecord;

/// Roots and per-parent children of a record sequence, in input order.
#[derive(Debug, Clone, Default)]
pub struct VersionIndex<'a> {
    roots: Vec<&'a FileRecord>,
    children: HashMap<&'a str, Vec<&'a FileRecord>>,
}

impl<'a> VersionIndex<'a> {
    /// Group `records` in one pass.
    pub fn build(records: impl IntoIterator<Item = &'a FileRecord>) -> Self {
        let mut index = Self::default();
        for record in records {
            match &record.parent_id {
                None => index.roots.push(record),
                Some(parent) => index
                    .children
                    .entry(parent.as_str())
                    .or_default()
                    .push(record),
            }
        }
        index
    }

    /// Records without a parent.
    pub fn roots(&self) -> &[&'a FileRecord] {
        &self.roots
    }

    /// Children of `parent_id`; empty when it has none.
    pub fn children_of(&self, parent_id: &str) -> &[&'a FileRecord] {
        self.children
            .get(parent_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `parent_id` has at least one child.
    pub fn has_children(&self, parent_id: &str) -> bool {
        self.children.contains_key(parent_id)
    }
}

/// A root record together with its previous versions.
#[derive(Debug, Clone, Serialize)]
pub struct VersionGroup<'a> {
    /// The current revision.
    pub root: &'a FileRecord,
    /// Previous revisions that pass the active filter.
    pub children: Vec<&'a FileRecord>,
    /// Whether the group's version history is open.
    pub expanded: bool,
}

/// Records whose `parent_id` names no record in `records`.
///
/// Such records never render anywhere; callers may want to log them.
pub fn dangling_children(records: &[FileRecord]) -> Vec<&FileRecord> {
    let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
    records
        .iter()
        .filter(|r| r.parent_id.as_ref().is_some_and(|p| !ids.contains(p.as_str())))
        .collect()
}
