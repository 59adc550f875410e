use crate::error::{Result, SgitError};
use derive_new::new;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Entries whose name starts with this character are invisible to every
/// recursive walk, at every depth. The marker directory itself is covered
/// by the same rule.
const HIDDEN_PREFIX: char = '.';

/// Working directory file system operations, rooted at the repository root.
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute location of a repository-relative path.
    pub fn absolutize(&self, relative_path: &Path) -> PathBuf {
        self.path.join(relative_path)
    }

    /// List every visible file under the repository root, as root-relative
    /// paths in name order. Hidden files and directories are skipped at
    /// every level.
    pub fn list_files(&self) -> Result<Vec<PathBuf>> {
        self.walk_visible_files(self.path.as_ref())
    }

    /// Recursively expand a repository-relative directory into the visible
    /// files it contains, again as root-relative paths.
    pub fn expand_directory(&self, relative_path: &Path) -> Result<Vec<PathBuf>> {
        self.walk_visible_files(&self.absolutize(relative_path))
    }

    fn walk_visible_files(&self, start: &Path) -> Result<Vec<PathBuf>> {
        WalkDir::new(start)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !Self::is_hidden(entry))
            .filter(|entry| {
                entry
                    .as_ref()
                    .map(|e| e.file_type().is_file())
                    .unwrap_or(true)
            })
            .map(|entry| {
                let entry = entry.map_err(|e| {
                    SgitError::corrupted(format!("failed to walk {:?}", start), e)
                })?;

                Ok(entry
                    .path()
                    .strip_prefix(self.path.as_ref())
                    .unwrap_or(entry.path())
                    .to_path_buf())
            })
            .collect()
    }

    fn is_hidden(entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_string_lossy()
            .starts_with(HIDDEN_PREFIX)
    }

    /// Re-base a path given relative to the invoker's working directory
    /// onto the repository root. Returns `None` when the path escapes the
    /// repository. Purely lexical, so it works for paths that do not
    /// exist yet.
    pub fn rebase_onto_root(&self, work_dir: &Path, raw: &str) -> Option<PathBuf> {
        let absolute = normalize(&work_dir.join(raw));

        absolute
            .strip_prefix(self.path.as_ref())
            .ok()
            .map(Path::to_path_buf)
    }
}

/// Lexical equivalent of `Path::canonicalize`: resolves `.` and `..`
/// components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    normalized
}
