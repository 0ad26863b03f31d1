//! Error types for the render crate.

use std::io;
use std::path::PathBuf;

use mdpack_walk::WalkError;

/// Errors that can occur while assembling a document.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The traversal root is missing or not a readable directory.
    #[error(transparent)]
    InvalidRoot(#[from] WalkError),

    /// The output document could not be created or truncated.
    #[error("cannot create output {}: {source}", .path.display())]
    OutputCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the already-open output document failed.
    #[error("cannot write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single input file could not be read or is not valid UTF-8.
    ///
    /// Recoverable: the assembler skips the file and carries on.
    #[error("unreadable file {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenderError {
    /// Returns `true` for errors that abort the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::UnreadableFile { .. })
    }
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
