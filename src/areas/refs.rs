//! The HEAD pointer
//!
//! HEAD is a single plain-text file inside the marker directory holding
//! either the id of the latest commit or nothing at all (no commits yet).
//! It is overwritten on every commit and is the only repository state
//! that is ever rewritten in place.

use crate::artifacts::commit_id::CommitId;
use crate::error::{Result, SgitError};
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use tracing::debug;

/// Name of the HEAD file inside the marker directory.
pub const HEAD_FILE: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the marker directory.
    path: Box<Path>,
}

impl Refs {
    /// Read the current HEAD value; `None` when no commit exists yet.
    pub fn read_head(&self) -> Result<Option<CommitId>> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path).map_err(|e| {
            SgitError::corrupted(format!("failed to read HEAD at {:?}", head_path), e)
        })?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CommitId::try_parse(content)?))
        }
    }

    /// Overwrite HEAD with a new commit id, under an exclusive lock on
    /// the HEAD file itself.
    pub fn update_head(&self, commit_id: &CommitId) -> Result<()> {
        let head_path = self.head_path();
        let mut head_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&head_path)
            .map_err(|e| {
                SgitError::corrupted(format!("failed to open HEAD at {:?}", head_path), e)
            })?;

        let mut lock = file_guard::lock(&mut head_file, Lock::Exclusive, 0, 1)
            .map_err(|e| SgitError::corrupted("failed to lock HEAD", e))?;
        lock.deref_mut()
            .write_all(commit_id.as_str().as_bytes())
            .map_err(|e| {
                SgitError::corrupted(format!("failed to write HEAD at {:?}", head_path), e)
            })?;

        debug!(head = %commit_id, "updated HEAD");

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_FILE).into_boxed_path()
    }
}
