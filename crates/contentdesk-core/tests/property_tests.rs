//! Property-based tests for the card editor
//!
//! Uses proptest to verify drag, preview and stats invariants.

use contentdesk_core::{
    Bounds, CardEditorSession, DragSurface, Point, PreviewRenderer, RenderMode, SourceStats,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Whole-pixel coordinates keep the subtraction exact
fn coord() -> impl Strategy<Value = f64> {
    (-2000i32..4000).prop_map(f64::from)
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn moves(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), 0..max)
}

fn source_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z<>/ \n\"=é😀]{0,200}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After every move, position = pointer - (grab point - element top-left)
    #[test]
    fn position_follows_pointer_minus_grab_offset(
        grab in point(),
        top_left in point(),
        path in moves(30),
    ) {
        let mut surface = DragSurface::new();
        surface.begin_drag(grab, Bounds::new(top_left, 300.0, 200.0));

        for p in path {
            surface.update_drag(p);
            prop_assert_eq!(surface.position(), p - (grab - top_left));
        }
    }

    /// Moves after release never change the position
    #[test]
    fn released_surface_ignores_moves(
        grab in point(),
        top_left in point(),
        path in moves(10),
        stray in moves(10),
    ) {
        let mut surface = DragSurface::new();
        surface.begin_drag(grab, Bounds::new(top_left, 300.0, 200.0));
        for p in path {
            surface.update_drag(p);
        }
        surface.end_drag();
        let frozen = surface.position();

        for p in stray {
            surface.update_drag(p);
            surface.end_drag();
        }
        prop_assert_eq!(surface.position(), frozen);
    }

    /// Line count is one more than the number of newlines
    #[test]
    fn line_count_matches_newlines(text in source_text()) {
        let stats = SourceStats::of(&text);
        prop_assert_eq!(stats.lines, text.matches('\n').count() + 1);
        prop_assert_eq!(stats.characters, text.encode_utf16().count());
    }

    /// Editing after a preview leaves the snapshot alone until the next preview
    #[test]
    fn preview_is_decoupled_from_edits(first in source_text(), second in source_text()) {
        let mut session = CardEditorSession::new(PreviewRenderer::new(RenderMode::Raw));
        session.edit(first.clone());
        session.preview();
        session.edit(second.clone());
        prop_assert_eq!(session.snapshot().source(), first.as_str());

        session.preview();
        prop_assert_eq!(session.snapshot().source(), second.as_str());
    }

    /// Loading a preset then previewing again changes nothing
    #[test]
    fn preview_after_load_is_idempotent(index in 0..contentdesk_core::CATALOG.len()) {
        let mut session = CardEditorSession::default();
        session.load_snippet(index).unwrap();
        let loaded = session.snapshot().clone();
        prop_assert_eq!(loaded.source(), contentdesk_core::CATALOG[index].code);
        prop_assert_eq!(session.source(), contentdesk_core::CATALOG[index].code);

        session.preview();
        prop_assert_eq!(session.snapshot(), &loaded);
    }
}
