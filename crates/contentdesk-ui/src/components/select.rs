//! Select Component

use dioxus::prelude::*;

use crate::FieldLabel;

/// Drop-down over a fixed set of options.
///
/// An empty `value` shows the placeholder option, if one is given.
#[component]
pub fn Select(
    id: String,
    label: String,
    value: String,
    options: Vec<String>,
    onchange: EventHandler<String>,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        div { class: "form-field",
            FieldLabel { target: id.clone(), text: label }
            select {
                id: "{id}",
                class: "input-field select",
                value: "{value}",
                onchange: move |e| onchange.call(e.value()),
                if !placeholder.is_empty() {
                    option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
                }
                for opt in options.iter() {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        selected: *opt == value,
                        "{opt}"
                    }
                }
            }
        }
    }
}
