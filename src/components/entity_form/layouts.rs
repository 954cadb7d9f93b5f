//! Per-kind dialog layouts around the schema fields.

use contentdesk_core::EntityForm;
use contentdesk_ui::{Button, ButtonVariant, SearchInput};
use dioxus::prelude::*;

use super::FieldList;
use crate::theme::TIP_SCREEN;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ArticleTab {
    Details,
    Editor,
    Tags,
}

impl ArticleTab {
    const ALL: [ArticleTab; 3] = [ArticleTab::Details, ArticleTab::Editor, ArticleTab::Tags];

    fn label(&self) -> &'static str {
        match self {
            ArticleTab::Details => "Details",
            ArticleTab::Editor => "Editor",
            ArticleTab::Tags => "Tags",
        }
    }
}

#[component]
pub fn ArticleBody(form: Signal<EntityForm>) -> Element {
    let mut tab = use_signal(|| ArticleTab::Details);

    rsx! {
        div { class: "tab-list",
            for t in ArticleTab::ALL {
                button {
                    key: "{t.label()}",
                    class: if tab() == t { "tab active" } else { "tab" },
                    onclick: move |_| tab.set(t),
                    "{t.label()}"
                    span { class: "tab-marker", "!" }
                }
            }
        }

        {match tab() {
            ArticleTab::Details => rsx! {
                div { class: "two-column",
                    div { class: "stack",
                        div { class: "image-slot", "\u{1F4F7}" }
                        FieldList { form, only: vec!["title", "description"] }
                    }
                    div { class: "stack",
                        FieldList {
                            form,
                            only: vec!["allowLikes", "allowSave", "allowClose", "hideInUserHistory", "tag", "isPrivate"],
                        }
                        p { class: "notice", "This content is only searchable for the following" }
                        FieldList { form, only: vec!["companies"] }
                    }
                }
            },
            ArticleTab::Editor => rsx! {
                div { class: "form-field",
                    span { class: "input-label", "Content Editor" }
                    div { class: "placeholder-region", "Rich text editor would go here..." }
                }
            },
            ArticleTab::Tags => rsx! {
                div { class: "form-field",
                    span { class: "input-label", "Tags Management" }
                    div { class: "placeholder-region", "Tag management interface would go here..." }
                }
            },
        }}
    }
}

/// Phone mock-up mirroring the tip draft
#[component]
fn TipPreview(form: Signal<EntityForm>) -> Element {
    let f = form.read();
    let draft = f.draft();
    let title = non_empty_or(draft.text("title"), "New tip title");
    let content = non_empty_or(draft.text("content"), "New tip text");
    let author = draft.text("author").to_string();
    let tagline = draft.text("authorTagline").to_string();

    rsx! {
        div { class: "phone",
            div { class: "phone-screen phone-screen--tip", style: "background: {TIP_SCREEN};",
                span { class: "tip-close", "\u{2715}" }
                div { class: "tip-card",
                    h3 { "{title}" }
                    p { "{content}" }
                    div { class: "tip-author",
                        div { class: "tip-avatar" }
                        div {
                            p { class: "tip-author-name", "{author}" }
                            p { class: "tip-author-tagline", "{tagline}" }
                        }
                    }
                }
                div { class: "tip-actions",
                    Button { "LEARN MORE" }
                    Button { "GOALS" }
                }
            }
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn TipBody(form: Signal<EntityForm>) -> Element {
    rsx! {
        div { class: "two-column",
            TipPreview { form }
            div { class: "stack",
                FieldList { form, only: vec!["tipType", "title", "content", "author", "authorTagline"] }
                SearchInput { label: "RELATED CONTENT".to_string() }
                FieldList { form, only: vec!["expiresAt"] }
                div { class: "form-field",
                    span { class: "input-label", "TAGS" }
                    Button {
                        onclick: move |_| tracing::info!("Tag editor requested"),
                        "Launch Tag Editor"
                    }
                }
                FieldList {
                    form,
                    only: vec!["allowLikes", "allowSave", "allowClose", "hideInUserHistory", "isPrivate", "tags"],
                }
            }
        }
    }
}

#[component]
pub fn CollectionBody(form: Signal<EntityForm>) -> Element {
    rsx! {
        div { class: "two-column",
            div { class: "stack",
                FieldList { form, only: vec!["name", "description", "backgroundColor", "fontColor"] }
                div { class: "info-note",
                    strong { "Design guidelines: " }
                    "Choose a dark background color that complements the main image. "
                    "Leave the font color white unless necessary for readability against the background."
                }
            }
            div { class: "stack",
                SearchInput { label: "CONTENT (DRAG TO REORDER)".to_string() }
                FieldList { form, only: vec!["isPrivate"] }
                div { class: "info-note", "Set Tags here after saving this content collection." }
                div { class: "image-slot", "\u{1F4F7}" }
            }
        }
    }
}

#[component]
pub fn HtmlCardBody(form: Signal<EntityForm>) -> Element {
    rsx! {
        div { class: "two-column",
            div { class: "phone",
                div { class: "phone-screen phone-screen--card",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| tracing::info!("Card preview refresh requested"),
                        "\u{21BB} Refresh"
                    }
                    span { style: "font-size: 2rem; color: #d1d5db;", "\u{2661}" }
                }
            }
            FieldList { form }
        }
    }
}
