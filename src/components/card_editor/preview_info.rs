use contentdesk_core::CardEditorSession;
use contentdesk_ui::Badge;
use dioxus::prelude::*;

/// Length, line count, drag status and render mode of the current source
#[component]
pub fn PreviewInfo(session: Signal<CardEditorSession>) -> Element {
    let s = session.read();
    let stats = s.stats();
    let dragging = s.is_dragging();
    let status = s.drag_status();
    let mode = s.renderer().mode();

    rsx! {
        div { class: "panel",
            div { class: "panel-header", "Preview Information" }
            div { class: "panel-body",
                div { class: "info-row",
                    span { class: "info-label", "HTML Length:" }
                    span { class: "info-value", "{stats.characters} characters" }
                }
                div { class: "info-row",
                    span { class: "info-label", "Lines:" }
                    span { class: "info-value", "{stats.lines}" }
                }
                div { class: "info-row",
                    span { class: "info-label", "Drag Status:" }
                    Badge { active: dragging, "{status}" }
                }
                div { class: "info-row",
                    span { class: "info-label", "Rendering:" }
                    span { class: "info-value", "{mode}" }
                }
            }
        }
    }
}
