//! Core type definitions used across the FileDesk workspace.

pub mod filter;

pub use filter::FilterCriteria;
