//! Content Desk Core Library
//!
//! Authoring logic for the Content Desk admin app: the HTML card editor and
//! the entity forms for articles, tips, collections and HTML cards.
//!
//! ## Overview
//!
//! - [`CardEditorSession`]: source buffer, on-demand preview, draggable
//!   preview card, snippet presets, clipboard copy and file download
//! - [`EntityForm`]: one schema-driven dialog model for every content kind
//!
//! Nothing here touches a UI toolkit. Platform services (clipboard, save
//! dialog, content API) sit behind [`ClipboardSink`], [`ExportSink`] and
//! [`SaveBoundary`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use contentdesk_core::{CardEditorSession, FileExportSink, PreviewRenderer};
//!
//! let mut session = CardEditorSession::new(PreviewRenderer::default());
//! session.edit("<b>hi</b>");
//! session.preview();
//! session.download(&FileExportSink::new("/tmp"))?;
//! ```

pub mod drag;
pub mod editor;
pub mod error;
pub mod export;
pub mod form;
pub mod pointer;
pub mod preview;
pub mod snippets;

// Re-exports
pub use drag::{Bounds, DragSurface, Placement, Point, DEFAULT_POSITION};
pub use editor::{copy_source, is_preview_shortcut, CardEditorSession, EditorMode, SourceStats};
pub use error::{ContentError, ContentResult};
pub use export::{
    ClipboardSink, CopyOutcome, ExportReceipt, ExportSink, FileExportSink, HtmlExport,
    EXPORT_FILE_NAME, HTML_CONTENT_TYPE,
};
pub use form::{
    Entity, EntityDraft, EntityForm, EntityKind, FieldKind, FieldSpec, FieldValue, FormSchema,
    LoggingSave, SaveBoundary,
};
pub use pointer::{ListenerLedger, PointerHost, PointerSubscription};
pub use preview::{
    PreviewRenderer, PreviewSnapshot, RenderMode, EMPTY_PREVIEW_HINT, SANITIZED_AWAY_HINT,
};
pub use snippets::{SnippetPreset, CATALOG};
