//! Desktop implementations of the core export seams.

use std::path::PathBuf;

use contentdesk_core::export::write_export;
use contentdesk_core::{
    ClipboardSink, ContentError, ContentResult, ExportReceipt, ExportSink, FileExportSink,
    HtmlExport,
};
use rfd::FileDialog;

use crate::context::AppConfig;

/// System clipboard via arboard
pub struct DesktopClipboard;

impl ClipboardSink for DesktopClipboard {
    fn set_text(&mut self, text: &str) -> ContentResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ContentError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ContentError::Clipboard(e.to_string()))
    }
}

/// Asks where to save, pre-filled with the export's file name
pub struct SaveDialogSink {
    start_dir: Option<PathBuf>,
}

impl ExportSink for SaveDialogSink {
    fn deliver(&self, export: &HtmlExport) -> ContentResult<ExportReceipt> {
        let mut dialog = FileDialog::new()
            .set_title("Download HTML card")
            .set_file_name(export.file_name)
            .add_filter("HTML", &["html", "htm"]);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let path = dialog.save_file().ok_or(ContentError::ExportCancelled)?;
        write_export(&path, export)
    }
}

/// Download target chosen from config
pub enum DesktopExport {
    Directory(FileExportSink),
    Dialog(SaveDialogSink),
}

impl DesktopExport {
    pub fn from_config(config: &AppConfig) -> Self {
        match &config.export_dir {
            Some(dir) => DesktopExport::Directory(FileExportSink::new(dir)),
            None => DesktopExport::Dialog(SaveDialogSink {
                start_dir: dirs::download_dir(),
            }),
        }
    }
}

impl ExportSink for DesktopExport {
    fn deliver(&self, export: &HtmlExport) -> ContentResult<ExportReceipt> {
        match self {
            DesktopExport::Directory(sink) => sink.deliver(export),
            DesktopExport::Dialog(sink) => sink.deliver(export),
        }
    }
}
