//! Directory traversal for mdpack.
//!
//! Walks a tree from a root directory, pruning every directory and file whose
//! base name appears in an [`IgnoreSet`], and yields the surviving files as a
//! lazy, deterministic sequence of [`TraversalEntry`] values.
//!
//! # Key Types
//!
//! - [`IgnoreSet`] -- Literal base names excluded from the walk
//! - [`Traversal`] -- One-shot iterator over surviving files
//! - [`TraversalEntry`] -- A file's root-relative path and operable path

pub mod entry;
pub mod error;
pub mod ignore_set;
pub mod traversal;

pub use entry::TraversalEntry;
pub use error::{WalkError, WalkResult};
pub use ignore_set::{IgnoreSet, DEFAULT_IGNORED_NAMES};
pub use traversal::Traversal;
