//! Checkbox Component

use dioxus::prelude::*;

/// Labelled checkbox
#[component]
pub fn Checkbox(
    id: String,
    label: String,
    checked: bool,
    onchange: EventHandler<bool>,
    /// Trailing decoration after the label text
    #[props(default)]
    icon: String,
) -> Element {
    rsx! {
        div { class: "checkbox-row",
            input {
                id: "{id}",
                class: "checkbox",
                r#type: "checkbox",
                checked: checked,
                onchange: move |e| onchange.call(e.checked()),
            }
            label { class: "checkbox-label", r#for: "{id}",
                "{label}"
                if !icon.is_empty() {
                    span { class: "checkbox-icon", " {icon}" }
                }
            }
        }
    }
}
