//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `commits`: Immutable commit records and their snapshots
//! - `history`: Read-only traversal of the commit chain
//! - `refs`: The HEAD pointer
//! - `repository`: High-level repository operations and coordination
//! - `staging`: The append-only staging list
//! - `workspace`: Working directory file system operations

pub(crate) mod commits;
pub(crate) mod history;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod staging;
pub(crate) mod workspace;
