//! Extension to fence-tag classification.
//!
//! A single declarative table decides the language tag written after the
//! opening fence. Lookup is case-sensitive and keyed by the extension with
//! its leading dot; anything not in the table gets an empty tag.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Built-in extension to fence-tag pairs.
pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    (".tsx", "tsx"),
    (".ts", "typescript"),
    (".js", "javascript"),
    (".jsx", "jsx"),
    (".py", "python"),
    (".css", "css"),
    (".html", "html"),
    (".mjs", "mjs"),
    (".json", "json"),
    (".md", "markdown"),
    (".rs", "rust"),
    (".toml", "toml"),
];

/// Immutable lookup from extension (with dot) to fence tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionMap {
    tags: BTreeMap<String, String>,
}

impl ExtensionMap {
    /// Create a map with no entries; every file classifies as untagged.
    pub fn empty() -> Self {
        Self {
            tags: BTreeMap::new(),
        }
    }

    /// Return this map with `extension` mapped to `tag`.
    pub fn with_language(mut self, extension: impl Into<String>, tag: impl Into<String>) -> Self {
        self.tags.insert(extension.into(), tag.into());
        self
    }

    /// Tag for an extension such as `".rs"`, or `""` if unknown.
    pub fn tag_for_extension(&self, extension: &str) -> &str {
        self.tags.get(extension).map_or("", String::as_str)
    }

    /// Tag for a file's base name, or `""` if it has no known extension.
    pub fn classify(&self, file_name: &str) -> &str {
        self.tag_for_extension(extension_of(file_name))
    }

    /// Tag for a path, using its final component.
    pub fn classify_path(&self, path: &Path) -> &str {
        path.file_name()
            .and_then(|n| n.to_str())
            .map_or("", |name| self.classify(name))
    }
}

impl Default for ExtensionMap {
    fn default() -> Self {
        DEFAULT_LANGUAGES
            .iter()
            .fold(Self::empty(), |map, (ext, tag)| map.with_language(*ext, *tag))
    }
}

/// Extension of a base name, including the dot, or `""` if there is none.
///
/// Leading dots belong to the stem, so `.env` has no extension while
/// `.eslintrc.json` has `.json`. Only the last extension counts:
/// `bundle.min.js` has `.js`.
pub fn extension_of(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(dot) => &file_name[stem_start + dot..],
        None => "",
    }
}
