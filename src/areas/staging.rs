use crate::error::{Result, SgitError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File inside the marker directory holding the staging list, one
/// repository-relative path per line, in insertion order.
pub const STAGING_LIST_FILE: &str = "TO_COMMIT";

/// The append-only staging area.
///
/// Lifecycle: load from disk (`rehydrate`), mutate in memory (`stage`),
/// persist back (`write_updates`). A staged path means "included in every
/// future commit from now on"; no operation ever removes an entry.
#[derive(Debug)]
pub struct StagingArea {
    path: Box<Path>,
    entries: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl StagingArea {
    pub fn new(path: Box<Path>) -> Self {
        StagingArea {
            path,
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted staging list from disk, replacing any in-memory
    /// state.
    pub fn rehydrate(&mut self) -> Result<()> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            SgitError::corrupted(format!("failed to read staging list at {:?}", self.path), e)
        })?;

        self.entries = content.lines().map(PathBuf::from).collect();
        self.seen = self.entries.iter().cloned().collect();

        Ok(())
    }

    /// Append a path unless it is already staged. Returns whether the
    /// entry is new. Only the path reference is recorded; no content is
    /// copied at staging time.
    pub fn stage(&mut self, relative_path: PathBuf) -> bool {
        if self.seen.contains(&relative_path) {
            return false;
        }

        debug!(path = %relative_path.display(), "staging file");
        self.seen.insert(relative_path.clone());
        self.entries.push(relative_path);

        true
    }

    pub fn contains(&self, relative_path: &Path) -> bool {
        self.seen.contains(relative_path)
    }

    /// Staged paths in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }

    /// Persist the whole list back to disk.
    pub fn write_updates(&self) -> Result<()> {
        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(&entry.to_string_lossy());
            content.push('\n');
        }

        std::fs::write(&self.path, content).map_err(|e| {
            SgitError::corrupted(
                format!("failed to write staging list at {:?}", self.path),
                e,
            )
        })
    }
}
