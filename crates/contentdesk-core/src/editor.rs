//! HTML card editor session
//!
//! Owns the source buffer, the preview snapshot and the draggable preview
//! card. The preview only changes when it is explicitly requested.

use std::fmt;
use std::rc::Rc;

use crate::drag::{Bounds, DragSurface, Placement, Point};
use crate::error::{ContentError, ContentResult};
use crate::export::{ClipboardSink, CopyOutcome, ExportReceipt, ExportSink, HtmlExport};
use crate::pointer::{ListenerLedger, PointerHost, PointerSubscription};
use crate::preview::{PreviewRenderer, PreviewSnapshot};
use crate::snippets::{self, SnippetPreset, CATALOG, STARTER_CARD};

/// What the session is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    Editing,
    Dragging,
}

/// Figures shown in the preview information panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceStats {
    /// UTF-16 code units, the length a browser reports for the source
    pub characters: usize,
    /// Newline-delimited segments; an empty source has one line
    pub lines: usize,
}

impl SourceStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.encode_utf16().count(),
            lines: text.split('\n').count(),
        }
    }
}

/// Primary-modifier + Enter re-renders the preview.
pub fn is_preview_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    key == "Enter" && (ctrl || meta)
}

/// Write card source to a clipboard, logging any failure.
pub fn copy_source(clipboard: &mut dyn ClipboardSink, source: &str) -> CopyOutcome {
    match clipboard.set_text(source) {
        Ok(()) => {
            tracing::debug!(bytes = source.len(), "Card source copied");
            CopyOutcome::Copied {
                characters: source.encode_utf16().count(),
            }
        }
        Err(e) => {
            tracing::error!("Failed to copy code: {}", e);
            CopyOutcome::Failed(e.to_string())
        }
    }
}

/// One editing session of an HTML card
pub struct CardEditorSession {
    source: String,
    snapshot: PreviewSnapshot,
    renderer: PreviewRenderer,
    surface: DragSurface,
    mode: EditorMode,
    resume_mode: EditorMode,
    host: Rc<dyn PointerHost>,
    subscription: Option<PointerSubscription>,
    show_instructions: bool,
}

impl CardEditorSession {
    /// Session with the starter card already previewed.
    pub fn new(renderer: PreviewRenderer) -> Self {
        Self::with_host(renderer, Rc::new(ListenerLedger::new()))
    }

    pub fn with_host(renderer: PreviewRenderer, host: Rc<dyn PointerHost>) -> Self {
        let mut session = Self {
            source: STARTER_CARD.to_string(),
            snapshot: PreviewSnapshot::default(),
            renderer,
            surface: DragSurface::new(),
            mode: EditorMode::Idle,
            resume_mode: EditorMode::Idle,
            host,
            subscription: None,
            show_instructions: true,
        };
        session.preview();
        session
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn snapshot(&self) -> &PreviewSnapshot {
        &self.snapshot
    }

    pub fn renderer(&self) -> PreviewRenderer {
        self.renderer
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn stats(&self) -> SourceStats {
        SourceStats::of(&self.source)
    }

    pub fn catalog(&self) -> &'static [SnippetPreset] {
        CATALOG
    }

    /// Replace the source buffer. The preview is left alone.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.source = text.into();
        self.mark_edited();
    }

    /// Re-render the preview from the current source.
    pub fn preview(&mut self) {
        self.snapshot = self.renderer.render(&self.source);
        tracing::debug!(mode = %self.renderer.mode(), "Preview rendered");
    }

    /// Load the first catalog preset into both buffer and preview.
    pub fn reset(&mut self) {
        self.apply_preset(&CATALOG[0]);
    }

    pub fn load_snippet(&mut self, index: usize) -> ContentResult<()> {
        let preset = snippets::get(index).ok_or(ContentError::UnknownSnippet(index))?;
        self.apply_preset(preset);
        Ok(())
    }

    fn apply_preset(&mut self, preset: &SnippetPreset) {
        self.source = preset.code.to_string();
        self.snapshot = self.renderer.render(&self.source);
        self.mark_edited();
        tracing::debug!(snippet = preset.name, "Snippet loaded");
    }

    fn mark_edited(&mut self) {
        if self.mode == EditorMode::Dragging {
            self.resume_mode = EditorMode::Editing;
        } else {
            self.mode = EditorMode::Editing;
        }
    }

    /// Grab the preview card by its header.
    pub fn begin_drag(&mut self, pointer: Point, bounds: Bounds) -> bool {
        if !self.surface.begin_drag(pointer, bounds) {
            return false;
        }
        self.resume_mode = self.mode;
        self.mode = EditorMode::Dragging;
        self.subscription = Some(self.host.attach());
        tracing::debug!(x = pointer.x, y = pointer.y, "Drag started");
        true
    }

    pub fn update_drag(&mut self, pointer: Point) -> bool {
        self.surface.update_drag(pointer)
    }

    /// Release the card wherever the pointer is.
    pub fn end_drag(&mut self) {
        if self.surface.end_drag() {
            self.mode = self.resume_mode;
            let position = self.surface.position();
            tracing::debug!(x = position.x, y = position.y, "Drag ended");
        }
        self.subscription = None;
    }

    /// Return a released card to its place in the layout.
    pub fn dock(&mut self) {
        self.surface.dock();
    }

    pub fn is_dragging(&self) -> bool {
        self.surface.is_active()
    }

    /// Whether document-level pointer listeners are attached
    pub fn pointer_captured(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn position(&self) -> Point {
        self.surface.position()
    }

    pub fn placement(&self) -> Placement {
        self.surface.placement()
    }

    pub fn drag_status(&self) -> &'static str {
        if self.is_dragging() {
            "Dragging"
        } else {
            "Static"
        }
    }

    pub fn copy(&self, clipboard: &mut dyn ClipboardSink) -> CopyOutcome {
        copy_source(clipboard, &self.source)
    }

    pub fn export(&self) -> HtmlExport {
        HtmlExport::from_source(&self.source)
    }

    pub fn download(&self, sink: &dyn ExportSink) -> ContentResult<ExportReceipt> {
        sink.deliver(&self.export())
    }

    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    pub fn dismiss_instructions(&mut self) {
        self.show_instructions = false;
    }
}

impl Default for CardEditorSession {
    fn default() -> Self {
        Self::new(PreviewRenderer::default())
    }
}

impl fmt::Debug for CardEditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardEditorSession")
            .field("mode", &self.mode)
            .field("source_len", &self.source.len())
            .field("surface", &self.surface)
            .field("pointer_captured", &self.pointer_captured())
            .finish()
    }
}
