//! Content library - entry point listing every content kind.
//!
//! Each kind gets a section with its "New" action, a few sample entities
//! to open in edit mode, and its own form dialog. Accepted submissions are
//! listed at the bottom.

use contentdesk_core::{Entity, EntityForm, EntityKind};
use contentdesk_ui::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use serde_json::json;

use crate::app::Route;
use crate::components::EntityFormDialog;
use crate::context::{use_pending_start, use_submissions, PendingStart, StartPage};

/// Library page component.
///
/// Applies the `--start` launch option once, then stays put.
#[component]
pub fn Library() -> Element {
    let navigator = use_navigator();
    let mut pending = use_pending_start();

    use_effect(move || {
        let PendingStart(start) = *pending.peek();
        if start.is_some() {
            pending.set(PendingStart(None));
        }
        if start == Some(StartPage::Editor) {
            tracing::debug!("Launching into the card editor");
            navigator.push(Route::CardEditor {});
        }
    });

    rsx! {
        div { class: "page",
            nav { class: "page-nav",
                Link { to: Route::CardEditor {}, "HTML Card Editor \u{2192}" }
            }
            header { class: "page-header",
                h1 { class: "page-title", "Content Library" }
                p { class: "page-subtitle", "Create and edit articles, tips, collections and HTML cards" }
            }

            div { class: "library-grid",
                for kind in EntityKind::ALL {
                    KindSection { key: "{kind}", kind }
                }
            }

            SubmissionLog {}
        }
    }
}

/// One content kind: its actions and its dialog
#[component]
fn KindSection(kind: EntityKind) -> Element {
    let mut form = use_signal(|| EntityForm::new(kind));
    let samples = sample_entities(kind);

    let mut open = move |existing: Option<Entity>| {
        if let Err(e) = form.write().open(existing.as_ref()) {
            tracing::warn!("Could not open {} form: {}", kind, e);
        }
    };

    rsx! {
        div { class: "panel",
            div { class: "panel-header",
                "{kind.label()}"
                Button {
                    class: "ml-auto".to_string(),
                    size: ButtonSize::Small,
                    onclick: move |_| open(None),
                    "+ {kind.new_title()}"
                }
            }
            div { class: "panel-body",
                for (index, (title, entity)) in samples.into_iter().enumerate() {
                    div { key: "{index}", class: "entity-row",
                        span { "{title}" }
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Small,
                            onclick: move |_| open(Some(entity.clone())),
                            "Edit"
                        }
                    }
                }
            }
        }

        EntityFormDialog { form }
    }
}

#[component]
fn SubmissionLog() -> Element {
    let submissions = use_submissions();

    rsx! {
        div { class: "panel", style: "margin-top: 1.5rem;",
            div { class: "panel-header", "Submitted drafts" }
            div { class: "panel-body stack",
                if submissions.read().is_empty() {
                    p { class: "notice", "Nothing submitted yet." }
                }
                for (index, submission) in submissions.read().iter().enumerate() {
                    div { key: "{index}",
                        strong { "{submission.kind}" }
                        pre { class: "submission-log",
                            {serde_json::to_string_pretty(&submission.entity).unwrap_or_default()}
                        }
                    }
                }
            }
        }
    }
}

/// A few stored entities to exercise edit mode, including partial ones
fn sample_entities(kind: EntityKind) -> Vec<(String, Entity)> {
    let entities = match kind {
        EntityKind::Article => vec![
            json!({
                "title": "Morning Stretch Routine",
                "description": "Five minutes to loosen up before work.",
                "tag": "fitness",
                "allowLikes": true,
                "allowSave": true,
                "allowClose": false,
                "companies": ["Acme Health"],
            }),
            json!({ "title": "Draft without settings", "allowLikes": false }),
        ],
        EntityKind::Tip => vec![json!({
            "tipType": "Quick Tip",
            "title": "Hydrate early",
            "content": "A glass of water before coffee.",
            "author": "Dana Reyes",
            "allowSave": null,
        })],
        EntityKind::Collection => vec![json!({
            "name": "Weekend Reset",
            "description": "Small habits with big payoff",
            "backgroundColor": "#ecfdf5",
            "fontColor": "#065f46",
        })],
        EntityKind::HtmlCard => vec![json!({
            "name": "Seasonal banner",
            "type": "External link",
            "template": "basic-card",
            "mediaCarousel": { "video": false, "image": true, "template": false },
        })],
    };

    entities
        .into_iter()
        .map(|entity| {
            let title = ["title", "name"]
                .iter()
                .find_map(|key| entity.get(*key).and_then(|v| v.as_str()))
                .unwrap_or("Untitled")
                .to_string();
            (title, entity)
        })
        .collect()
}
