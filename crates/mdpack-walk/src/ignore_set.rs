//! Literal-name ignore set.
//!
//! Matching is exact string equality against an entry's base name. There is
//! no glob or path-pattern support: `node_modules` prunes every directory
//! named `node_modules` at any depth, and nothing else.

use std::collections::BTreeSet;
use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

/// Names excluded out of the box: build and dependency output, version
/// control metadata, package manifests and lockfiles, and the tool's own
/// output and script files.
pub const DEFAULT_IGNORED_NAMES: &[&str] = &[
    "_Extras",
    ".next",
    "node_modules",
    ".env",
    ".gitignore",
    "eslint.config.mjs",
    "next-env.d.ts",
    "next.config.ts",
    "package-lock.json",
    "package.json",
    "postcss.config.mjs",
    "README.md",
    "tsconfig.json",
    "complete.py",
    "complete.md",
    "public",
    ".git",
    "target",
    "Cargo.lock",
];

/// A set of literal file and directory names to skip during traversal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    /// Create an empty ignore set.
    pub fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Return this set with one more name added.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Returns `true` if `name` is exactly one of the ignored names.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns `true` if a base name taken from the filesystem is ignored.
    ///
    /// Names that are not valid UTF-8 never match.
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.contains(n))
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        DEFAULT_IGNORED_NAMES.iter().copied().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
