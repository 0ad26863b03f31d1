//! One-shot, ignore-aware directory traversal.
//!
//! [`Traversal`] wraps a `walkdir` iterator whose entry filter prunes ignored
//! names, so an ignored directory is never opened and none of its children
//! are visited. Entries within each directory are visited in file-name order,
//! which makes the output sequence identical across runs on an unchanged
//! tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, FilterEntry, WalkDir};

use crate::entry::TraversalEntry;
use crate::error::{WalkError, WalkResult};
use crate::ignore_set::IgnoreSet;

type EntryFilter = Box<dyn FnMut(&DirEntry) -> bool + Send>;

/// Lazy sequence of the files under a root that survive the ignore set.
///
/// The sequence is finite and cannot be restarted: iterating consumes the
/// traversal, and walking again requires a fresh [`Traversal::new`].
pub struct Traversal {
    root: PathBuf,
    inner: FilterEntry<walkdir::IntoIter, EntryFilter>,
    skipped_path: Option<PathBuf>,
}

impl std::fmt::Debug for Traversal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Traversal")
            .field("root", &self.root)
            .field("skipped_path", &self.skipped_path)
            .finish()
    }
}

impl Traversal {
    /// Prepare a traversal of `root`, pruning every name in `ignore`.
    ///
    /// Fails if the root is missing, is not a directory, or cannot be
    /// listed. No entry is read until the traversal is iterated.
    pub fn new(root: impl AsRef<Path>, ignore: IgnoreSet) -> WalkResult<Self> {
        let root = root.as_ref().to_path_buf();
        validate_root(&root)?;

        let filter: EntryFilter = Box::new(move |entry: &DirEntry| {
            // The root is walked even if its own name is in the set.
            if entry.depth() == 0 {
                return true;
            }
            let ignored = ignore.matches(entry.file_name());
            if ignored {
                debug!(path = %entry.path().display(), "pruned ignored entry");
            }
            !ignored
        });

        let inner = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(filter);

        Ok(Self {
            root,
            inner,
            skipped_path: None,
        })
    }

    /// Never yield the file at `path`, whatever its name.
    ///
    /// Used to keep the output document out of its own contents when it
    /// lives inside the root under a name the ignore set does not cover.
    pub fn skipping(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.skipped_path = Some(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    fn is_skipped(&self, path: &Path) -> bool {
        let Some(skipped) = &self.skipped_path else {
            return false;
        };
        // Only pay for canonicalization when the base names agree.
        if path.file_name() != skipped.file_name() {
            return false;
        }
        fs::canonicalize(path).is_ok_and(|p| &p == skipped)
    }
}

impl Iterator for Traversal {
    type Item = TraversalEntry;

    fn next(&mut self) -> Option<TraversalEntry> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(
                        path = ?err.path(),
                        error = %err,
                        "skipping entry that could not be listed"
                    );
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                continue;
            }
            if !file_type.is_file() && !(file_type.is_symlink() && link_target_is_file(entry.path())) {
                debug!(path = %entry.path().display(), "skipping special file");
                continue;
            }
            if self.is_skipped(entry.path()) {
                debug!(path = %entry.path().display(), "skipping output document");
                continue;
            }

            return Some(TraversalEntry::new(&self.root, entry.into_path()));
        }
    }
}

/// Whether a symlink may be yielded: its target is a regular file, or the
/// target cannot be inspected at all (a broken link, skipped later as
/// unreadable). Links to directories, FIFOs, sockets and devices are not.
fn link_target_is_file(link: &Path) -> bool {
    fs::metadata(link).map_or(true, |target| target.is_file())
}

fn validate_root(root: &Path) -> WalkResult<()> {
    let metadata = fs::metadata(root).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => WalkError::RootNotFound(root.to_path_buf()),
        _ => WalkError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        },
    })?;

    if !metadata.is_dir() {
        return Err(WalkError::RootNotDirectory(root.to_path_buf()));
    }

    fs::read_dir(root).map_err(|source| WalkError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(())
}
