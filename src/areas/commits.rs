//! The commit store
//!
//! Every commit is one directory inside the marker directory, named by
//! its id and holding three things: the tracked-path list frozen at
//! commit time, the id of the previous commit, and a snapshot tree with
//! a byte-for-byte copy of every tracked file. Records are immutable
//! once published; nothing ever prunes or rewrites them.
//!
//! A record is assembled under a temporary name and published with a
//! single atomic rename, so an interrupted commit leaves at worst an
//! orphan temp directory and never a partial record behind HEAD.

use crate::areas::workspace::Workspace;
use crate::artifacts::commit_id::CommitId;
use crate::error::{Result, SgitError};
use derive_new::new;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Tracked-path list frozen at commit time, one path per line.
pub const TRACKED_LIST_FILE: &str = "TRACKED_LIST";
/// Id of the previous commit; empty file for the root commit.
pub const PREV_COMMIT_FILE: &str = "PREV_COMMIT";
/// Snapshot tree mirroring the tracked files.
pub const COMMIT_DIR: &str = "COMMIT_DIR";

#[derive(Debug, new)]
pub struct CommitStore {
    /// Path to the marker directory.
    path: Box<Path>,
}

impl CommitStore {
    /// Create a new immutable commit record and return its id.
    ///
    /// The record captures `tracked` verbatim together with the current
    /// working-tree bytes of every path in it. A staged path that no
    /// longer exists on disk is a broken-repository condition, not a
    /// silent skip.
    pub fn create(
        &self,
        tracked: &[PathBuf],
        previous: Option<&CommitId>,
        workspace: &Workspace,
    ) -> Result<CommitId> {
        let commit_id = CommitId::generate();
        let record_path = self.record_path(&commit_id);

        // Ids are random; an existing record directory means the store
        // itself is damaged.
        if record_path.exists() {
            return Err(SgitError::CommitIdCollision { id: commit_id });
        }

        let staged_path = self.path.join(format!("tmp-{}", commit_id));
        self.write_record(&staged_path, tracked, previous, workspace)?;

        std::fs::rename(&staged_path, &record_path).map_err(|e| {
            SgitError::corrupted(
                format!("failed to publish commit record at {:?}", record_path),
                e,
            )
        })?;

        debug!(commit = %commit_id, files = tracked.len(), "published commit record");

        Ok(commit_id)
    }

    fn write_record(
        &self,
        staged_path: &Path,
        tracked: &[PathBuf],
        previous: Option<&CommitId>,
        workspace: &Workspace,
    ) -> Result<()> {
        std::fs::create_dir(staged_path).map_err(|e| {
            SgitError::corrupted(
                format!("failed to create commit record at {:?}", staged_path),
                e,
            )
        })?;

        let mut tracked_list = String::new();
        for path in tracked {
            tracked_list.push_str(&path.to_string_lossy());
            tracked_list.push('\n');
        }
        std::fs::write(staged_path.join(TRACKED_LIST_FILE), tracked_list)
            .map_err(|e| SgitError::corrupted("failed to write tracked list", e))?;

        let previous = previous.map(CommitId::as_str).unwrap_or_default();
        std::fs::write(staged_path.join(PREV_COMMIT_FILE), previous)
            .map_err(|e| SgitError::corrupted("failed to write previous commit id", e))?;

        let snapshot_root = staged_path.join(COMMIT_DIR);
        for path in tracked {
            self.snapshot_file(&snapshot_root, path, workspace)?;
        }

        Ok(())
    }

    fn snapshot_file(
        &self,
        snapshot_root: &Path,
        relative_path: &Path,
        workspace: &Workspace,
    ) -> Result<()> {
        let source = workspace.absolutize(relative_path);

        if !source.is_file() {
            return Err(SgitError::StagedFileMissing {
                path: relative_path.to_path_buf(),
            });
        }

        let destination = snapshot_root.join(relative_path);
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SgitError::corrupted(
                    format!("failed to create snapshot directory {:?}", parent),
                    e,
                )
            })?;
        }

        std::fs::copy(&source, &destination).map_err(|e| {
            SgitError::corrupted(
                format!("failed to snapshot {:?}", relative_path),
                e,
            )
        })?;

        Ok(())
    }

    pub fn record_path(&self, commit_id: &CommitId) -> PathBuf {
        self.path.join(commit_id.as_str())
    }
}
