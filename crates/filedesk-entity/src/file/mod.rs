//! File record entities.

pub mod field;
pub mod record;
pub mod status;

pub use field::RecordField;
pub use record::{FileRecord, RecordId};
pub use status::FileStatus;
