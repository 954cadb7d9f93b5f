//! Source editor panel with the preview and export actions.

use contentdesk_core::{copy_source, is_preview_shortcut, CardEditorSession, ContentError, ExportSink};
use contentdesk_ui::{Button, ButtonVariant, TextArea};
use dioxus::prelude::*;

use crate::context::app_config;
use crate::platform::{DesktopClipboard, DesktopExport};

#[component]
pub fn SourcePanel(session: Signal<CardEditorSession>) -> Element {
    let mut session = session;
    let mut copied = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let on_keydown = move |e: KeyboardEvent| {
        let modifiers = e.modifiers();
        if is_preview_shortcut(
            &e.key().to_string(),
            modifiers.contains(Modifiers::CONTROL),
            modifiers.contains(Modifiers::META),
        ) {
            e.prevent_default();
            session.write().preview();
        }
    };

    // Fire-and-forget: the outcome only drives the transient label
    let copy_code = move |_| {
        let text = session.read().source().to_string();
        spawn(async move {
            let outcome = copy_source(&mut DesktopClipboard, &text);
            if outcome.is_copied() {
                copied.set(true);
                tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                copied.set(false);
            }
        });
    };

    let download = move |_| {
        let export = session.read().export();
        notice.set(None);
        spawn(async move {
            // Save dialog blocks, keep it off the UI thread
            let result = tokio::task::spawn_blocking(move || {
                DesktopExport::from_config(app_config()).deliver(&export)
            })
            .await;

            match result {
                Ok(Ok(receipt)) => {
                    notice.set(Some(format!("Saved to {}", receipt.path.display())));
                }
                Ok(Err(ContentError::ExportCancelled)) => {
                    tracing::info!("Download cancelled");
                }
                Ok(Err(e)) => {
                    tracing::error!("Failed to download card: {}", e);
                    notice.set(Some(format!("Download failed: {}", e)));
                }
                Err(e) => {
                    tracing::error!("Download task failed: {}", e);
                }
            }
        });
    };

    let source = session.read().source().to_string();

    rsx! {
        div { class: "panel",
            div { class: "panel-header", "\u{2039}/\u{203A} HTML Editor" }
            div { class: "panel-body stack",
                TextArea {
                    id: "html-source".to_string(),
                    value: source,
                    placeholder: "Enter your HTML code here...".to_string(),
                    class: "code-editor".to_string(),
                    rows: 16,
                    oninput: move |text: String| session.write().edit(text),
                    onkeydown: on_keydown,
                }

                div { class: "button-row",
                    Button { onclick: move |_| session.write().preview(), "\u{1F441} Preview" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| session.write().reset(),
                        "\u{21BA} Reset"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: copy_code,
                        if copied() { "\u{2713} Copied" } else { "\u{29C9} Copy Code" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: download,
                        "\u{2913} Download"
                    }
                }

                if let Some(text) = notice() {
                    p { class: "notice", "{text}" }
                }
            }
        }
    }
}
