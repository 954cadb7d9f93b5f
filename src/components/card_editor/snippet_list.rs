use contentdesk_core::CardEditorSession;
use contentdesk_ui::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Example snippets with one-click loading
#[component]
pub fn SnippetList(session: Signal<CardEditorSession>) -> Element {
    let mut session = session;
    let catalog = session.read().catalog();

    rsx! {
        div { class: "panel",
            div { class: "panel-header", "Example Snippets" }
            div { class: "panel-body stack",
                for (index, snippet) in catalog.iter().enumerate() {
                    div { key: "{snippet.name}", class: "snippet-row",
                        span { style: "font-weight: 500;", "{snippet.name}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| {
                                if let Err(e) = session.write().load_snippet(index) {
                                    tracing::warn!("Could not load snippet: {}", e);
                                }
                            },
                            "Load"
                        }
                    }
                }
            }
        }
    }
}
