//! # filedesk-entity
//!
//! Domain entity models for FileDesk. A [`file::FileRecord`] is one
//! uploaded document revision; previous revisions point at the current
//! one through `parent_id`.

pub mod file;
