//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Freeze the staged files into a new commit
//! - `status`: Show per-file tracking state

pub mod add;
pub mod commit;
pub mod init;
pub mod status;
