//! Markdown assembly for mdpack.
//!
//! Turns the files produced by an [`mdpack_walk::Traversal`] into a single
//! markdown document: each readable file becomes a block made of its
//! root-relative path and its unmodified content inside a code fence tagged
//! with the language inferred from its extension.
//!
//! # Key Types
//!
//! - [`AssembleConfig`] -- Root, output path, ignore set and language map for a run
//! - [`ExtensionMap`] -- Static extension to fence-tag lookup
//! - [`OutputDocument`] -- The truncated-then-appended output file
//! - [`RunSummary`] -- Counts reported once a run completes

pub mod assembler;
pub mod config;
pub mod document;
pub mod error;
pub mod language;
pub mod summary;

pub use assembler::{assemble, read_text};
pub use config::{AssembleConfig, DEFAULT_OUTPUT_FILE};
pub use document::{write_block, OutputDocument};
pub use error::{RenderError, RenderResult};
pub use language::{extension_of, ExtensionMap, DEFAULT_LANGUAGES};
pub use summary::RunSummary;
