use colored::Colorize;
use std::fmt;

/// Tracking classification of a single working-tree file.
///
/// Classification is by path membership only; content is never compared,
/// so a committed file that was modified on disk afterwards still counts
/// as `Committed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// Not in the staging list nor in the latest commit's tracked list.
    Untracked,
    /// In the staging list, not yet part of the latest commit.
    Staged,
    /// In the latest commit's tracked list. Status prints nothing for
    /// these files.
    Committed,
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileState::Untracked => write!(f, "{}", "(new file)".red()),
            FileState::Staged => write!(f, "{}", "(added and waiting to commit)".green()),
            FileState::Committed => Ok(()),
        }
    }
}
