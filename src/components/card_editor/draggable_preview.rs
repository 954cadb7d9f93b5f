//! Live preview card, draggable by its header.
//!
//! While a drag holds the session's pointer listeners, a full-window
//! capture layer receives move and release events, so the drag continues
//! when the pointer leaves the card.
//!
//! The grab offset is measured against the card's own client rectangle, so
//! pressing on any child of the header keeps the card under the pointer.

use std::rc::Rc;

use contentdesk_core::{Bounds, CardEditorSession, Placement, Point};
use contentdesk_ui::Badge;
use dioxus::prelude::*;

fn client_point(e: &MouseEvent) -> Point {
    let p = e.client_coordinates();
    Point::new(p.x, p.y)
}

#[component]
pub fn DraggablePreview(session: Signal<CardEditorSession>) -> Element {
    let mut session = session;
    let mut card = use_signal(|| Option::<Rc<MountedData>>::None);
    // Cleared on release so a rect that resolves late does not start a drag
    let mut pressed = use_signal(|| false);

    let (placement, dragging, captured, markup, placeholder) = {
        let s = session.read();
        (
            s.placement(),
            s.is_dragging(),
            s.pointer_captured(),
            s.snapshot().markup().to_string(),
            s.snapshot().placeholder(),
        )
    };

    let card_class = if dragging {
        "panel preview-card preview-card--dragging"
    } else {
        "panel preview-card"
    };
    let card_style = placement.css();
    let floating = matches!(placement, Placement::Floating { .. });

    let grab = move |e: MouseEvent| {
        e.prevent_default();
        let pointer = client_point(&e);
        let Some(mounted) = card() else {
            tracing::warn!("Preview card not mounted yet, ignoring grab");
            return;
        };
        pressed.set(true);

        spawn(async move {
            match mounted.get_client_rect().await {
                Ok(rect) => {
                    if !pressed() {
                        return;
                    }
                    let bounds = Bounds::from_client_rect(
                        rect.origin.x,
                        rect.origin.y,
                        rect.size.width,
                        rect.size.height,
                    );
                    session.write().begin_drag(pointer, bounds);
                }
                Err(e) => tracing::warn!("Could not measure preview card: {:?}", e),
            }
        });
    };

    let mut release = move || {
        pressed.set(false);
        session.write().end_drag();
    };

    rsx! {
        div { style: "position: relative;",
            div {
                class: "{card_class}",
                style: "{card_style}",
                onmounted: move |e: MountedEvent| card.set(Some(e.data())),
                div {
                    class: "panel-header drag-handle",
                    role: "button",
                    tabindex: "0",
                    "aria-label": "Drag to move preview card",
                    onmousedown: grab,
                    onmouseup: move |_| pressed.set(false),
                    "\u{2725} Live Preview"
                    Badge { class: "ml-auto".to_string(), "Draggable" }
                    if floating && !dragging {
                        button {
                            class: "btn-ghost btn-sm",
                            onmousedown: move |e| e.stop_propagation(),
                            onclick: move |_| session.write().dock(),
                            "Dock"
                        }
                    }
                }
                div { class: "panel-body",
                    div { class: "preview-pane",
                        if let Some(hint) = placeholder {
                            div { class: "preview-empty", "{hint}" }
                        } else {
                            div { style: "width: 100%;", dangerous_inner_html: "{markup}" }
                        }
                    }
                }
            }
        }

        if captured {
            div {
                class: "pointer-capture",
                onmousemove: move |e: MouseEvent| {
                    session.write().update_drag(client_point(&e));
                },
                onmouseup: move |_| release(),
                onmouseleave: move |_| release(),
            }
        }
    }
}
