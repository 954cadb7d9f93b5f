//! Export seams: clipboard copy and HTML file download.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ContentError, ContentResult};

/// File name used for every card download.
pub const EXPORT_FILE_NAME: &str = "html-card.html";

/// Content type attached to card downloads.
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// A card source packaged for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlExport {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl HtmlExport {
    pub fn from_source(source: &str) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME,
            content_type: HTML_CONTENT_TYPE,
            bytes: source.as_bytes().to_vec(),
        }
    }
}

/// Where a delivered export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// Delivers an export to the user
pub trait ExportSink {
    fn deliver(&self, export: &HtmlExport) -> ContentResult<ExportReceipt>;
}

/// Writes exports into a fixed directory
#[derive(Debug, Clone)]
pub struct FileExportSink {
    dir: PathBuf,
}

impl FileExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for FileExportSink {
    fn deliver(&self, export: &HtmlExport) -> ContentResult<ExportReceipt> {
        write_export(&self.dir.join(export.file_name), export)
    }
}

/// Write an export to an exact path.
pub fn write_export(path: &Path, export: &HtmlExport) -> ContentResult<ExportReceipt> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ContentError::Export(format!(
                "export directory does not exist: {}",
                parent.display()
            )));
        }
    }
    fs::write(path, &export.bytes)?;
    tracing::info!(path = %path.display(), bytes = export.bytes.len(), "Card exported");
    Ok(ExportReceipt {
        path: path.to_path_buf(),
        bytes_written: export.bytes.len(),
    })
}

/// System clipboard
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> ContentResult<()>;
}

/// Result of a copy. Failures are reported, never raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied { characters: usize },
    Failed(String),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_is_tagged_html() {
        let export = HtmlExport::from_source("<p>x</p>");
        assert_eq!(export.file_name, "html-card.html");
        assert_eq!(export.content_type, "text/html");
        assert_eq!(export.bytes, b"<p>x</p>");
    }

    #[test]
    fn file_sink_writes_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileExportSink::new(dir.path());
        let receipt = sink.deliver(&HtmlExport::from_source("abc")).unwrap();

        assert_eq!(receipt.path, dir.path().join("html-card.html"));
        assert_eq!(receipt.bytes_written, 3);
        assert_eq!(fs::read_to_string(&receipt.path).unwrap(), "abc");
    }

    #[test]
    fn missing_dir_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileExportSink::new(dir.path().join("nope"));
        let err = sink.deliver(&HtmlExport::from_source("abc")).unwrap_err();
        assert!(matches!(err, ContentError::Export(_)));
    }
}
