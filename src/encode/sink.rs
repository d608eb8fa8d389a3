use std::io::Write;
use std::path::{Path, PathBuf};

use crate::foundation::error::{PixelifyError, PixelifyResult};

/// File name used when a document is saved without an explicit path.
pub const DEFAULT_DOCUMENT_FILE_NAME: &str = "pixel-art.html";

/// Destination for a generated document.
///
/// Failures are reported as [`PixelifyError::Sink`]. A failed write never touches the grid or
/// document that produced it, so callers can retry with the same text.
pub trait DocumentSink {
    /// Deliver one complete document.
    fn write_document(&mut self, document: &str) -> PixelifyResult<()>;
}

/// Writes the document to a file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    overwrite: bool,
}

impl FileSink {
    /// Sink that refuses to replace an existing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            overwrite: false,
        }
    }

    /// Allow (or forbid) replacing an existing file.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Target path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSink {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_FILE_NAME)
    }
}

impl DocumentSink for FileSink {
    fn write_document(&mut self, document: &str) -> PixelifyResult<()> {
        if !self.overwrite && self.path.exists() {
            return Err(PixelifyError::sink(format!(
                "refusing to overwrite '{}'",
                self.path.display()
            )));
        }
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, document).map_err(|e| {
            PixelifyError::sink(format!("write document '{}': {e}", self.path.display()))
        })?;
        tracing::info!(path = %self.path.display(), bytes = document.len(), "wrote document");
        Ok(())
    }
}

/// Writes the document to any [`Write`] (stdout, a pipe to a clipboard tool, a buffer).
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> DocumentSink for WriterSink<W> {
    fn write_document(&mut self, document: &str) -> PixelifyResult<()> {
        self.inner
            .write_all(document.as_bytes())
            .and_then(|()| self.inner.flush())
            .map_err(|e| PixelifyError::sink(format!("write document: {e}")))
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    documents: Vec<String>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents received so far, oldest first.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    /// Most recently received document.
    pub fn last(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }
}

impl DocumentSink for InMemorySink {
    fn write_document(&mut self, document: &str) -> PixelifyResult<()> {
        self.documents.push(document.to_owned());
        Ok(())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> PixelifyResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            PixelifyError::sink(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
