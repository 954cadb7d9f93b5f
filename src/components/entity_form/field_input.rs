//! Schema-driven field editors.

use contentdesk_core::{EntityForm, FieldKind, FieldSpec, FieldValue};
use contentdesk_ui::{Badge, Checkbox, ColorInput, Input, Select, TextArea};
use dioxus::prelude::*;

fn apply(mut form: Signal<EntityForm>, key: &str, value: FieldValue) {
    if let Err(e) = form.write().set(key, value) {
        tracing::warn!("Rejected edit to {}: {}", key, e);
    }
}

/// Decoration shown after a checkbox label
fn flag_icon(key: &str) -> &'static str {
    match key {
        "allowLikes" => "\u{2661}",
        "allowSave" => "\u{1F516}",
        "allowClose" => "\u{2297}",
        _ => "",
    }
}

/// Editor for one schema field, bound to the form's draft.
#[component]
pub fn FieldInput(form: Signal<EntityForm>, spec: FieldSpec) -> Element {
    let key = spec.key;
    let id = format!("field-{}", key);
    let label = spec.label.to_string();
    let placeholder = spec.placeholder.unwrap_or_default().to_string();
    let value = form.read().draft().get(key).cloned();
    let text = value
        .as_ref()
        .and_then(FieldValue::as_text)
        .unwrap_or_default()
        .to_string();

    match spec.kind {
        FieldKind::Text => rsx! {
            Input {
                id,
                value: text,
                label,
                placeholder,
                required: spec.required,
                oninput: move |s: String| apply(form, key, FieldValue::Text(s)),
            }
        },
        FieldKind::Date => rsx! {
            Input {
                id,
                value: text,
                label,
                placeholder: "MM/DD/YYYY".to_string(),
                oninput: move |s: String| apply(form, key, FieldValue::Text(s)),
            }
        },
        FieldKind::LongText => rsx! {
            TextArea {
                id,
                value: text,
                label,
                placeholder,
                required: spec.required,
                rows: 5,
                oninput: move |s: String| apply(form, key, FieldValue::Text(s)),
            }
        },
        FieldKind::Color => rsx! {
            ColorInput {
                id,
                label,
                value: text,
                oninput: move |s: String| apply(form, key, FieldValue::Text(s)),
            }
        },
        FieldKind::Choice(options) => rsx! {
            Select {
                id,
                label,
                value: text,
                options: options.iter().map(|o| o.to_string()).collect::<Vec<_>>(),
                placeholder,
                onchange: move |s: String| apply(form, key, FieldValue::Text(s)),
            }
        },
        FieldKind::Flag => rsx! {
            Checkbox {
                id,
                label,
                checked: value.as_ref().and_then(FieldValue::as_flag).unwrap_or(false),
                icon: flag_icon(key).to_string(),
                onchange: move |on: bool| apply(form, key, FieldValue::Flag(on)),
            }
        },
        FieldKind::List => {
            let items = match value {
                Some(FieldValue::List(items)) => items,
                _ => Vec::new(),
            };
            rsx! {
                div { class: "form-field",
                    span { class: "input-label", "{label}" }
                    div { class: "list-field",
                        if items.is_empty() {
                            span { class: "list-field-empty", "Managed after saving" }
                        }
                        for item in items.iter() {
                            Badge { key: "{item}", "{item}" }
                        }
                    }
                }
            }
        }
        FieldKind::Group(_) => {
            let members = match value {
                Some(FieldValue::Group(members)) => members,
                _ => Vec::new(),
            };
            rsx! {
                div { class: "form-field",
                    span { class: "input-label", "{label}" }
                    div { class: "group-field",
                        for (member, on) in members.into_iter() {
                            GroupMember {
                                key: "{member}",
                                form,
                                field: key,
                                member: member.clone(),
                                checked: on,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GroupMember(
    form: Signal<EntityForm>,
    field: &'static str,
    member: String,
    checked: bool,
) -> Element {
    let mut form = form;
    let id = format!("field-{}-{}", field, member);
    let name = member.clone();

    rsx! {
        Checkbox {
            id,
            label: member,
            checked,
            onchange: move |_| {
                if let Err(e) = form.write().toggle_member(field, &name) {
                    tracing::warn!("Rejected edit to {}.{}: {}", field, name, e);
                }
            },
        }
    }
}

/// Every schema field, in schema order, optionally filtered by key.
#[component]
pub fn FieldList(
    form: Signal<EntityForm>,
    /// Restrict to these keys; all fields when empty
    #[props(default)]
    only: Vec<&'static str>,
) -> Element {
    let fields: Vec<FieldSpec> = form
        .read()
        .schema()
        .fields
        .iter()
        .filter(|f| only.is_empty() || only.contains(&f.key))
        .cloned()
        .collect();

    rsx! {
        div { class: "field-grid",
            for spec in fields.into_iter() {
                FieldInput { key: "{spec.key}", form, spec: spec.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_only_for_engagement_flags() {
        assert_eq!(flag_icon("allowLikes"), "\u{2661}");
        assert_eq!(flag_icon("isPrivate"), "");
    }
}
