//! Runs a traversal into an output document.
//!
//! The order of fatal checks is fixed: the root is validated before the
//! output is touched, and the output is created before any file is read.
//! Per-file read failures are logged and counted, never propagated.

use std::fs;
use std::io;
use std::path::Path;

use mdpack_walk::Traversal;
use tracing::{debug, info};

use crate::config::AssembleConfig;
use crate::document::OutputDocument;
use crate::error::{RenderError, RenderResult};
use crate::summary::RunSummary;

/// Read a whole file as UTF-8 text.
///
/// Any failure, including invalid UTF-8, is reported as
/// [`RenderError::UnreadableFile`].
pub fn read_text(path: &Path) -> RenderResult<String> {
    let unreadable = |source: io::Error| RenderError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    };
    let bytes = fs::read(path).map_err(unreadable)?;
    String::from_utf8(bytes).map_err(|e| unreadable(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Assemble every surviving file under the configured root into the
/// configured output document.
pub fn assemble(config: &AssembleConfig) -> RenderResult<RunSummary> {
    let traversal = Traversal::new(&config.root, config.ignore.clone())?;

    let output = config.output_path();
    let mut document = OutputDocument::create(&output)?;
    let traversal = traversal.skipping(&output);

    info!(root = %config.root.display(), output = %output.display(), "assembling document");

    let mut skipped = 0;
    for entry in traversal {
        let content = match read_text(&entry.path) {
            Ok(content) => content,
            Err(err) if !err.is_fatal() => {
                debug!(error = %err, "skipping file");
                skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };
        let tag = config.languages.classify_path(&entry.path);
        document.append(&entry.relative, tag, &content)?;
    }

    let summary = RunSummary {
        output: document.path().to_path_buf(),
        written: document.blocks(),
        skipped,
        bytes: document.bytes(),
    };
    document.finish()?;

    info!(
        written = summary.written,
        skipped = summary.skipped,
        bytes = summary.bytes,
        "document assembled"
    );
    Ok(summary)
}
