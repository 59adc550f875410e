use crate::areas::repository::Repository;
use file_guard::Lock;
use std::io::Write;

impl Repository {
    /// Stage files for commit.
    ///
    /// Paths are given relative to the invoker's working directory and
    /// re-based onto the repository root. A missing path is a per-file
    /// report, never an abort: the rest of the batch is still staged.
    /// Directories expand recursively, skipping hidden entries at every
    /// level. Staging an already-staged file is a silent no-op.
    pub fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        let lock_file = self.open_lock_file()?;
        let _lock = file_guard::lock(&lock_file, Lock::Exclusive, 0, 1)?;

        let mut staging = self.staging();
        staging.rehydrate()?;

        for raw in paths {
            let Some(relative_path) = self.workspace().rebase_onto_root(self.work_dir(), raw)
            else {
                writeln!(self.writer(), "ERROR: {} doesn't exist!", raw)?;
                continue;
            };
            let absolute_path = self.workspace().absolutize(&relative_path);

            if !absolute_path.exists() {
                writeln!(
                    self.writer(),
                    "ERROR: {} doesn't exist!",
                    absolute_path.display()
                )?;
                continue;
            }

            if absolute_path.is_dir() {
                for file in self.workspace().expand_directory(&relative_path)? {
                    staging.stage(file);
                }
            } else {
                staging.stage(relative_path);
            }
        }

        staging.write_updates()?;

        Ok(())
    }
}
