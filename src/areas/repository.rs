use crate::areas::commits::CommitStore;
use crate::areas::history::History;
use crate::areas::refs::Refs;
use crate::areas::staging::{STAGING_LIST_FILE, StagingArea};
use crate::areas::workspace::Workspace;
use crate::error::{Result, SgitError};
use std::cell::{RefCell, RefMut};
use std::fs::File;
use std::path::{Path, PathBuf};

/// The marker directory whose presence identifies a repository root.
pub const MARKER_DIR: &str = ".sgit";

/// Advisory lock file held for the duration of add, commit and status.
const LOCK_FILE: &str = "LOCK";

/// High-level repository facade coordinating the workspace, the staging
/// area, the HEAD pointer and the commit store.
pub struct Repository {
    root: Box<Path>,
    work_dir: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    staging: RefCell<StagingArea>,
    refs: Refs,
    commits: CommitStore,
    history: History,
}

/// Locate the enclosing repository root by walking upward from `start`
/// until a directory containing the marker is found. Pure: touches
/// nothing, returns `None` when the filesystem root is reached without a
/// match.
pub fn locate(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|candidate| candidate.join(MARKER_DIR).is_dir())
        .map(Path::to_path_buf)
}

impl Repository {
    /// Open the repository enclosing `work_dir`.
    pub fn open(work_dir: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let work_dir = work_dir
            .canonicalize()
            .map_err(|e| SgitError::corrupted("failed to resolve working directory", e))?;
        let root = locate(&work_dir).ok_or(SgitError::RepositoryAbsent)?;
        let marker = root.join(MARKER_DIR).into_boxed_path();

        Ok(Repository {
            workspace: Workspace::new(root.clone().into_boxed_path()),
            staging: RefCell::new(StagingArea::new(
                marker.join(STAGING_LIST_FILE).into_boxed_path(),
            )),
            refs: Refs::new(marker.clone()),
            commits: CommitStore::new(marker.clone()),
            history: History::new(marker),
            root: root.into_boxed_path(),
            work_dir: work_dir.into_boxed_path(),
            writer: RefCell::new(writer),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub(crate) fn staging(&'_ self) -> RefMut<'_, StagingArea> {
        self.staging.borrow_mut()
    }

    pub(crate) fn refs(&self) -> &Refs {
        &self.refs
    }

    pub(crate) fn commits(&self) -> &CommitStore {
        &self.commits
    }

    pub(crate) fn history(&self) -> &History {
        &self.history
    }

    /// Open the repository lock file; commands hold an exclusive advisory
    /// lock on it for their whole duration, serializing concurrent
    /// invocations against the same repository.
    pub(crate) fn open_lock_file(&self) -> Result<File> {
        let lock_path = self.root.join(MARKER_DIR).join(LOCK_FILE);

        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| {
                SgitError::corrupted(format!("failed to open lock file at {:?}", lock_path), e)
            })
    }
}
