//! HTML Card Editor
//!
//! Source editor, snippet list, draggable live preview and preview
//! information, all driven by one [`CardEditorSession`].

mod draggable_preview;
mod instructions;
mod preview_info;
mod snippet_list;
mod source_panel;

use contentdesk_core::{CardEditorSession, PreviewRenderer};
use dioxus::prelude::*;

use crate::context::app_config;
use draggable_preview::DraggablePreview;
use instructions::Instructions;
use preview_info::PreviewInfo;
use snippet_list::SnippetList;
use source_panel::SourcePanel;

#[component]
pub fn HtmlCardEditor() -> Element {
    let session = use_signal(|| {
        CardEditorSession::new(PreviewRenderer::new(app_config().render_mode))
    });

    rsx! {
        div { class: "stack",
            if session.read().show_instructions() {
                Instructions { session }
            }

            div { class: "two-column",
                div { class: "stack",
                    SourcePanel { session }
                    SnippetList { session }
                }
                div { class: "stack",
                    DraggablePreview { session }
                    PreviewInfo { session }
                }
            }
        }
    }
}
