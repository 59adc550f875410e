use crate::areas::repository::Repository;
use file_guard::Lock;
use std::io::Write;
use std::path::PathBuf;

impl Repository {
    /// Freeze the current content of every staged file into a new
    /// immutable commit and move HEAD to it.
    ///
    /// The staging list is never cleared: every future commit again
    /// includes all paths ever staged, with their then-current content.
    pub fn commit(&self) -> anyhow::Result<()> {
        let lock_file = self.open_lock_file()?;
        let _lock = file_guard::lock(&lock_file, Lock::Exclusive, 0, 1)?;

        let mut staging = self.staging();
        staging.rehydrate()?;
        let tracked = staging.entries().cloned().collect::<Vec<PathBuf>>();

        let previous = self.refs().read_head()?;
        let is_root = match previous {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let commit_id = self
            .commits()
            .create(&tracked, previous.as_ref(), self.workspace())?;
        self.refs().update_head(&commit_id)?;

        writeln!(
            self.writer(),
            "[{}{}] {} file(s) tracked",
            is_root,
            commit_id,
            tracked.len()
        )?;

        Ok(())
    }
}
