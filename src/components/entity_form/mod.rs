//! Entity Form Dialog
//!
//! One dialog for every content kind. Fields come from the form's schema;
//! only the surrounding layout differs per kind.

mod field_input;
mod layouts;

pub use field_input::{FieldInput, FieldList};

use contentdesk_core::{EntityForm, EntityKind};
use contentdesk_ui::{Button, ButtonVariant, Dialog, DialogWidth};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_save_boundary, use_submissions, Submission};
use layouts::{ArticleBody, CollectionBody, HtmlCardBody, TipBody};

/// Modal editor for one entity form
///
/// # Example
///
/// ```rust,ignore
/// let mut form = use_signal(|| EntityForm::new(EntityKind::Tip));
///
/// rsx! {
///     button { onclick: move |_| { let _ = form.write().open(None); }, "New Tip" }
///     EntityFormDialog { form }
/// }
/// ```
#[component]
pub fn EntityFormDialog(form: Signal<EntityForm>) -> Element {
    let mut form = form;
    let mut save = use_save_boundary();
    let mut submissions = use_submissions();
    let mut error = use_signal(|| Option::<String>::None);
    let navigator = use_navigator();

    let (is_open, title, kind) = {
        let f = form.read();
        (f.is_open(), f.title(), f.kind())
    };

    let submit = move |_| {
        let result = form.write().submit(&mut *save.write());
        match result {
            Ok(entity) => {
                error.set(None);
                submissions.write().insert(0, Submission { kind, entity });
            }
            Err(e) => {
                tracing::error!("Failed to save {}: {}", kind, e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let cancel = move |_| {
        error.set(None);
        form.write().cancel();
    };

    let open_snippets = move |_| {
        form.write().cancel();
        navigator.push(Route::CardEditor {});
    };

    let width = match kind {
        EntityKind::Tip | EntityKind::HtmlCard => DialogWidth::ExtraWide,
        EntityKind::Article | EntityKind::Collection => DialogWidth::Wide,
    };

    rsx! {
        Dialog {
            open: is_open,
            title: title.to_string(),
            width,
            on_close: cancel,
            actions: rsx! {
                if kind == EntityKind::HtmlCard {
                    Button { variant: ButtonVariant::Accent, onclick: open_snippets, "HTML snippets" }
                }
                Button { variant: ButtonVariant::Save, button_type: "submit".to_string(), onclick: submit, "Save" }
                Button { variant: ButtonVariant::Outline, onclick: cancel, "Cancel" }
            },

            if let Some(err) = error() {
                p { class: "dialog-error", "\u{26A0} {err}" }
            }

            {match kind {
                EntityKind::Article => rsx! { ArticleBody { form } },
                EntityKind::Tip => rsx! { TipBody { form } },
                EntityKind::Collection => rsx! { CollectionBody { form } },
                EntityKind::HtmlCard => rsx! { HtmlCardBody { form } },
            }}
        }
    }
}
