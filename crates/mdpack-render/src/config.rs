use std::path::PathBuf;

use mdpack_walk::IgnoreSet;
use serde::{Deserialize, Serialize};

use crate::language::ExtensionMap;

/// File name written in the traversal root when no output is given.
pub const DEFAULT_OUTPUT_FILE: &str = "complete.md";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssembleConfig {
    pub root: PathBuf,
    /// Output path; a relative path is taken relative to `root`.
    pub output: PathBuf,
    pub ignore: IgnoreSet,
    pub languages: ExtensionMap,
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            ignore: IgnoreSet::default(),
            languages: ExtensionMap::default(),
        }
    }
}

impl AssembleConfig {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Where the document will actually be written.
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }
}
