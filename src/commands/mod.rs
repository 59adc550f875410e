//! Command implementations
//!
//! Every user-facing command is a porcelain operation on the repository
//! facade. There is no plumbing layer: the on-disk format is simple
//! enough that the porcelain commands talk to the areas directly.

pub mod porcelain;
