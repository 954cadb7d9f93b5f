//! End-to-end scenarios for the card editor and entity forms

use std::cell::RefCell;
use std::fs;
use std::io;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use contentdesk_core::{
    Bounds, CardEditorSession, ClipboardSink, ContentError, ContentResult, CopyOutcome,
    EntityForm, EntityKind, ExportReceipt, ExportSink, FieldValue, FileExportSink, HtmlExport,
    ListenerLedger, LoggingSave, Point, PreviewRenderer, RenderMode, EMPTY_PREVIEW_HINT,
    SANITIZED_AWAY_HINT,
};
use serde_json::json;

/// Clipboard that records what it was given
#[derive(Default)]
struct RecordingClipboard {
    text: Option<String>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> ContentResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> ContentResult<()> {
        Err(ContentError::Clipboard("no display".to_string()))
    }
}

/// Log output captured by a test subscriber
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber writing plain-text logs into the returned buffer
fn with_captured_logs(f: impl FnOnce()) -> String {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

/// Sink that keeps exports in memory
#[derive(Default)]
struct MemorySink {
    delivered: RefCell<Vec<HtmlExport>>,
}

impl ExportSink for MemorySink {
    fn deliver(&self, export: &HtmlExport) -> ContentResult<ExportReceipt> {
        self.delivered.borrow_mut().push(export.clone());
        Ok(ExportReceipt {
            path: export.file_name.into(),
            bytes_written: export.bytes.len(),
        })
    }
}

// ============================================================================
// Entity forms
// ============================================================================

#[test]
fn test_article_seed_preserves_false_flag() {
    let mut form = EntityForm::new(EntityKind::Article);
    form.open(Some(&json!({"title": "X", "allowLikes": false})))
        .unwrap();

    let draft = form.draft();
    assert_eq!(draft.text("title"), "X");
    assert!(!draft.flag("allowLikes"));

    // Everything else at defaults
    assert_eq!(draft.text("description"), "");
    assert!(draft.flag("allowSave"));
    assert!(draft.flag("allowClose"));
    assert!(!draft.flag("hideInUserHistory"));
    assert_eq!(draft.text("tag"), "");
    assert!(!draft.flag("isPrivate"));
    assert_eq!(draft.get("companies"), Some(&FieldValue::List(vec![])));
}

#[test]
fn test_null_fields_fall_back() {
    let mut form = EntityForm::new(EntityKind::Collection);
    form.open(Some(&json!({
        "name": "Autumn",
        "backgroundColor": null,
        "fontColor": "",
        "isPrivate": true
    })))
    .unwrap();

    let draft = form.draft();
    assert_eq!(draft.text("name"), "Autumn");
    assert_eq!(draft.text("backgroundColor"), "#000000");
    assert_eq!(draft.text("fontColor"), "#000000");
    assert!(draft.flag("isPrivate"));
}

#[test]
fn test_html_card_edit_and_submit() {
    let mut form = EntityForm::new(EntityKind::HtmlCard);
    form.open(Some(&json!({
        "name": "Promo",
        "mediaCarousel": {"video": true}
    })))
    .unwrap();
    assert_eq!(form.title(), "Edit HTML Card");

    form.set("template", FieldValue::text("basic-card")).unwrap();
    form.toggle_member("mediaCarousel", "template").unwrap();

    let mut save = LoggingSave::new();
    let saved = form.submit(&mut save).unwrap();
    assert_eq!(
        saved,
        json!({
            "name": "Promo",
            "type": "No link",
            "template": "basic-card",
            "mediaCarousel": {"video": true, "image": false, "template": true},
            "author": ""
        })
    );
    assert!(!form.is_open());
}

#[test]
fn test_reopening_new_form_forgets_previous_draft() {
    let mut form = EntityForm::new(EntityKind::Tip);
    form.open(Some(&json!({"title": "Old", "author": "Ada"})))
        .unwrap();
    form.cancel();

    form.open(None).unwrap();
    assert_eq!(form.title(), "New Tip");
    assert_eq!(form.draft().text("title"), "");
    assert_eq!(form.draft().text("author"), "New Author");
}

// ============================================================================
// Card editor
// ============================================================================

#[test]
fn test_download_exact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = CardEditorSession::default();
    session.edit("<b>hi</b>");

    let receipt = session.download(&FileExportSink::new(dir.path())).unwrap();
    assert_eq!(receipt.path.file_name().unwrap(), "html-card.html");
    assert_eq!(fs::read_to_string(&receipt.path).unwrap(), "<b>hi</b>");

    let sink = MemorySink::default();
    session.download(&sink).unwrap();
    let delivered = sink.delivered.borrow();
    assert_eq!(delivered[0].content_type, "text/html");
    assert_eq!(delivered[0].bytes, b"<b>hi</b>".to_vec());
}

#[test]
fn test_download_exports_source_not_preview() {
    let sink = MemorySink::default();
    let mut session = CardEditorSession::default();
    session.edit("<i>unpreviewed</i>");
    session.download(&sink).unwrap();
    assert_eq!(sink.delivered.borrow()[0].bytes, b"<i>unpreviewed</i>".to_vec());
}

#[test]
fn test_copy_success_and_failure() {
    let mut session = CardEditorSession::default();
    session.edit("<p>copy</p>");

    let mut clipboard = RecordingClipboard::default();
    assert_eq!(
        session.copy(&mut clipboard),
        CopyOutcome::Copied { characters: 11 }
    );
    assert_eq!(clipboard.text.as_deref(), Some("<p>copy</p>"));

    let outcome = session.copy(&mut BrokenClipboard);
    assert!(!outcome.is_copied());
    // Failure leaves the session untouched
    assert_eq!(session.source(), "<p>copy</p>");
}

#[test]
fn test_listeners_released_when_session_dropped_mid_drag() {
    let ledger = ListenerLedger::new();
    {
        let mut session =
            CardEditorSession::with_host(PreviewRenderer::default(), Rc::new(ledger.clone()));
        session.begin_drag(
            Point::new(70.0, 60.0),
            Bounds::new(Point::new(50.0, 50.0), 400.0, 300.0),
        );
        assert_eq!(ledger.live(), 1);
    }
    assert_eq!(ledger.live(), 0);
}

#[test]
fn test_listeners_attached_only_while_dragging() {
    let ledger = ListenerLedger::new();
    let mut session =
        CardEditorSession::with_host(PreviewRenderer::default(), Rc::new(ledger.clone()));
    assert_eq!(ledger.live(), 0);

    session.begin_drag(Point::new(0.0, 0.0), Bounds::default());
    session.begin_drag(Point::new(5.0, 5.0), Bounds::default());
    assert_eq!(ledger.live(), 1);

    session.end_drag();
    session.end_drag();
    assert_eq!(ledger.live(), 0);
}

#[test]
fn test_sanitized_default_strips_script_from_preview() {
    let mut session = CardEditorSession::default();
    session.edit("<div style=\"color: red\">ok</div><script>alert('x')</script>");
    session.preview();
    assert!(!session.snapshot().markup().contains("script"));
    assert!(session.snapshot().markup().contains("ok"));
    // The snapshot still records the authored source
    assert!(session.snapshot().source().contains("<script>"));

    let mut raw = CardEditorSession::new(PreviewRenderer::new(RenderMode::Raw));
    raw.edit("<script>alert('x')</script>");
    raw.preview();
    assert_eq!(raw.snapshot().markup(), "<script>alert('x')</script>");
}

#[test]
fn test_copy_failure_is_logged_as_error() {
    let mut session = CardEditorSession::default();
    session.edit("<p>copy</p>");

    let logs = with_captured_logs(|| {
        assert!(!session.copy(&mut BrokenClipboard).is_copied());
    });
    assert!(logs.contains("ERROR"), "logs: {logs}");
    assert!(logs.contains("Failed to copy code"), "logs: {logs}");
    assert!(logs.contains("no display"), "logs: {logs}");
}

#[test]
fn test_copy_counts_utf16_units() {
    let mut session = CardEditorSession::default();
    session.edit("<p>😀</p>");
    assert_eq!(
        session.copy(&mut RecordingClipboard::default()),
        CopyOutcome::Copied { characters: 9 }
    );
}

#[test]
fn test_fully_sanitized_preview_is_not_reported_as_unrendered() {
    let mut session = CardEditorSession::default();
    session.edit("<script>alert(1)</script>");
    session.preview();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.markup(), "");
    assert_ne!(snapshot.placeholder(), Some(EMPTY_PREVIEW_HINT));
    assert_eq!(snapshot.placeholder(), Some(SANITIZED_AWAY_HINT));
}

#[test]
fn test_drag_from_header_child_moves_card_by_pointer_delta() {
    let mut session = CardEditorSession::default();
    let card = Bounds::from_client_rect(100.0, 100.0, 480.0, 320.0);

    // Press on a badge inside the header, well away from the card corner
    assert!(session.begin_drag(Point::new(305.0, 117.0), card));
    session.update_drag(Point::new(306.0, 117.0));
    assert_eq!(session.position(), Point::new(101.0, 100.0));

    session.update_drag(Point::new(325.0, 147.0));
    assert_eq!(session.position(), Point::new(120.0, 130.0));
    session.end_drag();
}
