//! Error kinds for repository operations
//!
//! Lower layers return specific kinds so that failures stay diagnosable;
//! the command dispatcher in `main` is the single safety net that turns
//! any of them into a fatal message and a non-zero exit.

use crate::artifacts::commit_id::CommitId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SgitError {
    /// An operation that requires a repository found none on the path
    /// from the working directory up to the filesystem root.
    #[error("no repository found")]
    RepositoryAbsent,

    /// Initialization was requested inside an existing repository.
    #[error("repository already exists at {path:?}")]
    RepositoryAlreadyExists { path: PathBuf },

    /// A freshly generated commit id names a record directory that is
    /// already present. Ids are 128 random bits, so this only happens
    /// when the store itself is damaged.
    #[error("commit record for {id} already exists")]
    CommitIdCollision { id: CommitId },

    /// A staged path disappeared from the working tree before commit.
    /// Staged paths are assumed to remain valid until committed.
    #[error("staged file {path:?} is missing from the working tree")]
    StagedFileMissing { path: PathBuf },

    /// A persisted commit id does not have the expected shape.
    #[error("malformed commit id {raw:?}")]
    MalformedCommitId { raw: String },

    /// Any lower-level filesystem failure while reading or writing
    /// repository state.
    #[error("{context}")]
    Corrupted {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl SgitError {
    pub fn corrupted(context: impl Into<String>, source: impl Into<std::io::Error>) -> Self {
        SgitError::Corrupted {
            context: context.into(),
            source: source.into(),
        }
    }
}

pub type Result<T, E = SgitError> = std::result::Result<T, E>;
