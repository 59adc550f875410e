use crate::areas::refs::HEAD_FILE;
use crate::areas::repository::{MARKER_DIR, Repository, locate};
use crate::areas::staging::STAGING_LIST_FILE;
use crate::error::SgitError;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Initialize a new repository at `work_dir`: the marker directory,
    /// an empty HEAD and an empty staging list. Refuses when any
    /// enclosing repository already exists, not just one in `work_dir`
    /// itself.
    pub fn init(work_dir: &Path, writer: &mut dyn std::io::Write) -> anyhow::Result<()> {
        let work_dir = work_dir
            .canonicalize()
            .context("Failed to resolve working directory")?;

        if let Some(root) = locate(&work_dir) {
            return Err(SgitError::RepositoryAlreadyExists { path: root }.into());
        }

        let marker = work_dir.join(MARKER_DIR);
        fs::create_dir(&marker).context("Failed to create marker directory")?;
        fs::write(marker.join(HEAD_FILE), b"").context("Failed to create empty HEAD")?;
        fs::write(marker.join(STAGING_LIST_FILE), b"")
            .context("Failed to create empty staging list")?;

        writeln!(
            writer,
            "Initialized empty repository in {}",
            work_dir.display()
        )?;

        Ok(())
    }
}
