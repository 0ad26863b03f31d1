//! Traversal entry type.

use std::path::{Component, Path, PathBuf};

/// A file that survived the ignore filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalEntry {
    /// Path relative to the traversal root, components joined with `/`.
    pub relative: String,
    /// Path that can be opened for reading.
    pub path: PathBuf,
}

impl TraversalEntry {
    /// Build an entry for `path`, which must lie under `root`.
    pub fn new(root: &Path, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let relative = render_relative(path.strip_prefix(root).unwrap_or(&path));
        Self { relative, path }
    }
}

/// Render a relative path with `/` separators, whatever the host uses.
///
/// Non-UTF-8 components are converted lossily.
pub fn render_relative(relative: &Path) -> String {
    let mut out = String::new();
    for component in relative.components() {
        let part = match component {
            Component::Normal(part) => part.to_string_lossy(),
            Component::CurDir => continue,
            other => other.as_os_str().to_string_lossy(),
        };
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&part);
    }
    out
}
