//! Domain value types
//!
//! - `commit_id`: randomly allocated commit identifiers
//! - `file_state`: per-file tracking classification reported by status

pub mod commit_id;
pub mod file_state;
