//! Core traits defined in `filedesk-core` and implemented by other crates.

pub mod source;

pub use source::RecordSource;
