//! # filedesk-core
//!
//! Core crate for FileDesk. Contains the record source trait,
//! configuration schemas, filter criteria, and the unified error system.
//!
//! This crate has **no** internal dependencies on other FileDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
