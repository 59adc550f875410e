//! Read-only traversal of the commit chain
//!
//! The chain is singly linked: each record names its predecessor, and
//! HEAD names the latest record. Following predecessor links from HEAD
//! always terminates in an empty predecessor after exactly as many steps
//! as commits were ever made.

use crate::areas::commits::{PREV_COMMIT_FILE, TRACKED_LIST_FILE};
use crate::areas::refs::Refs;
use crate::artifacts::commit_id::CommitId;
use crate::error::{Result, SgitError};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct History {
    /// Path to the marker directory.
    path: Box<Path>,
    refs: Refs,
}

impl History {
    pub fn new(path: Box<Path>) -> Self {
        History {
            refs: Refs::new(path.clone()),
            path,
        }
    }

    /// Id of the latest commit, straight from HEAD.
    pub fn latest(&self) -> Result<Option<CommitId>> {
        self.refs.read_head()
    }

    /// Predecessor of a commit; `None` for the root commit.
    pub fn previous_of(&self, commit_id: &CommitId) -> Result<Option<CommitId>> {
        let prev_path = self.path.join(commit_id.as_str()).join(PREV_COMMIT_FILE);
        let content = std::fs::read_to_string(&prev_path).map_err(|e| {
            SgitError::corrupted(
                format!("failed to read previous commit id at {:?}", prev_path),
                e,
            )
        })?;
        let content = content.trim();

        if content.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CommitId::try_parse(content)?))
        }
    }

    /// The staging list as it stood when the commit was created.
    pub fn tracked_list_of(&self, commit_id: &CommitId) -> Result<Vec<PathBuf>> {
        let list_path = self.path.join(commit_id.as_str()).join(TRACKED_LIST_FILE);
        let content = std::fs::read_to_string(&list_path).map_err(|e| {
            SgitError::corrupted(
                format!("failed to read tracked list at {:?}", list_path),
                e,
            )
        })?;

        Ok(content.lines().map(PathBuf::from).collect())
    }
}
