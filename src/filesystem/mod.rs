//! In-memory directory hierarchy.
//!
//! Directories are kept in an arena owned by [`Tree`] and referred to by
//! [`DirId`]. Each directory knows its parent, which is enough to derive
//! absolute paths and to walk back up towards the root.

mod fixture;
mod fixture_file;
mod tree;

pub use fixture::sample_tree;
pub use fixture_file::{FixtureError, FixtureFile};
pub use tree::{DirId, Directory, FileEntry, Tree};
