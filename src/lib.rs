//! sgit - a minimal local version-control engine
//!
//! The crate is organized the same way the binary uses it:
//!
//! - `areas`: storage and coordination concerns (repository, workspace,
//!   staging area, refs, commit store, history)
//! - `artifacts`: small domain value types (commit ids, file states)
//! - `commands`: user-facing command implementations
//! - `error`: structured error kinds shared by every layer

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
