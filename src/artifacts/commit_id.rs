//! Commit identifiers
//!
//! Commit ids are not content addressed: each one is 128 bits of
//! randomness rendered as 32 lowercase hex characters. Collision
//! probability is negligible, so no uniqueness check is performed
//! against existing records.

use crate::error::SgitError;
use std::fmt;

/// Fixed width of a rendered commit id.
pub const COMMIT_ID_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommitId(String);

impl CommitId {
    /// Allocate a fresh random identifier.
    pub fn generate() -> Self {
        CommitId(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Parse an id read back from disk, rejecting anything that does not
    /// have the fixed 32-hex-char shape.
    pub fn try_parse(raw: impl Into<String>) -> crate::error::Result<Self> {
        let raw = raw.into();

        if raw.len() == COMMIT_ID_LEN && raw.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(CommitId(raw))
        } else {
            Err(SgitError::MalformedCommitId { raw })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
