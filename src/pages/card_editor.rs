//! Standalone HTML card editor page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::HtmlCardEditor;

#[component]
pub fn CardEditor() -> Element {
    rsx! {
        div { class: "page",
            nav { class: "page-nav",
                Link { to: Route::Library {}, "\u{2190} Content library" }
            }
            header { class: "page-header",
                h1 { class: "page-title", "HTML Card Editor" }
                p { class: "page-subtitle",
                    "Create, edit, and preview HTML cards with drag-and-drop functionality"
                }
            }
            HtmlCardEditor {}
        }
    }
}
