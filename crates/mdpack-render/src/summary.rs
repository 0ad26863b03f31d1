//! Completion report for a run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a completed run produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Where the document was written.
    pub output: PathBuf,
    /// Files copied into the document.
    pub written: usize,
    /// Files that were found but could not be read as text.
    pub skipped: usize,
    /// Content bytes copied, excluding headers and fences.
    pub bytes: u64,
}

impl RunSummary {
    /// Total files the traversal produced.
    pub fn visited(&self) -> usize {
        self.written + self.skipped
    }
}
