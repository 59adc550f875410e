use crate::areas::repository::Repository;
use crate::artifacts::file_state::FileState;
use file_guard::Lock;
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Report the tracking state of every visible working-tree file.
    ///
    /// Classification is by path membership only; content is never
    /// compared. A committed file that was modified on disk afterwards
    /// still prints nothing.
    pub fn status(&self) -> anyhow::Result<()> {
        let lock_file = self.open_lock_file()?;
        let _lock = file_guard::lock(&lock_file, Lock::Exclusive, 0, 1)?;

        let mut staging = self.staging();
        staging.rehydrate()?;

        let committed = match self.history().latest()? {
            Some(commit_id) => self
                .history()
                .tracked_list_of(&commit_id)?
                .into_iter()
                .collect::<HashSet<PathBuf>>(),
            None => HashSet::new(),
        };

        for path in self.workspace().list_files()? {
            let state = if committed.contains(&path) {
                FileState::Committed
            } else if staging.contains(&path) {
                FileState::Staged
            } else {
                FileState::Untracked
            };

            if state != FileState::Committed {
                writeln!(self.writer(), "{} {}", path.display(), state)?;
            }
        }

        Ok(())
    }
}
