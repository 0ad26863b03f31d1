//! Error types for the walk crate.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while setting up a traversal.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// The root path does not exist.
    #[error("traversal root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The root path exists but is not a directory.
    #[error("traversal root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    /// The root directory could not be listed.
    #[error("traversal root is not readable: {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convenience alias for walk results.
pub type WalkResult<T> = Result<T, WalkError>;
