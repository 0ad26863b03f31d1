//! The output document and the block format written into it.
//!
//! Each block has the layout:
//!
//! ~~~text
//! <relative/path>
//! ```<tag>
//! <content>
//! ```
//! <blank line>
//! ~~~

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{RenderError, RenderResult};

const FENCE: &str = "```";

/// Write one fenced block for a file to `out`.
pub fn write_block<W: Write>(out: &mut W, relative: &str, tag: &str, content: &str) -> io::Result<()> {
    writeln!(out, "{relative}")?;
    writeln!(out, "{FENCE}{tag}")?;
    out.write_all(content.as_bytes())?;
    write!(out, "\n{FENCE}\n\n")?;
    Ok(())
}

/// Exclusive, append-only handle on the output markdown file.
///
/// Creating the document truncates whatever was there before. The handle is
/// released when the document is finished or dropped, so it is never leaked
/// on an early return.
pub struct OutputDocument {
    path: PathBuf,
    writer: BufWriter<File>,
    blocks: usize,
    bytes: u64,
}

impl std::fmt::Debug for OutputDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDocument")
            .field("path", &self.path)
            .field("blocks", &self.blocks)
            .field("bytes", &self.bytes)
            .finish()
    }
}

impl OutputDocument {
    /// Create (or truncate) the document at `path`.
    pub fn create(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| RenderError::OutputCreation {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            blocks: 0,
            bytes: 0,
        })
    }

    /// Append a block for one file.
    pub fn append(&mut self, relative: &str, tag: &str, content: &str) -> RenderResult<()> {
        write_block(&mut self.writer, relative, tag, content).map_err(|source| {
            RenderError::OutputWrite {
                path: self.path.clone(),
                source,
            }
        })?;

        self.blocks += 1;
        self.bytes += content.len() as u64;
        debug!(path = relative, tag, len = content.len(), "appended block");
        Ok(())
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of blocks appended so far.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Content bytes copied so far, excluding headers and fences.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    /// Flush buffered output and release the file.
    pub fn finish(mut self) -> RenderResult<()> {
        self.writer.flush().map_err(|source| RenderError::OutputWrite {
            path: self.path.clone(),
            source,
        })
    }
}
