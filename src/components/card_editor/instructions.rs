use contentdesk_core::CardEditorSession;
use contentdesk_ui::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// "How to use" panel, dismissible for the session
#[component]
pub fn Instructions(session: Signal<CardEditorSession>) -> Element {
    let mut session = session;

    rsx! {
        div { class: "info-note",
            p { strong { "How to use the HTML Card Editor:" } }
            ul {
                li { strong { "Edit HTML: " } "Type your HTML code in the editor below" }
                li { strong { "Preview: " } "Click \"Preview\" or use Ctrl/Cmd + Enter to see your HTML rendered" }
                li { strong { "Drag & Drop: " } "Click and drag the card header to reposition the preview card" }
                li { strong { "Examples: " } "Try the example snippets to get started" }
                li { strong { "Export: " } "Copy code to clipboard or download as HTML file" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                onclick: move |_| session.write().dismiss_instructions(),
                "Got it, hide instructions"
            }
        }
    }
}
