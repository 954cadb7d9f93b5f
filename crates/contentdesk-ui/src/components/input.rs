//! Input Field Components
//!
//! Text inputs, textareas, date and color inputs. Labels of fields marked
//! `required` are drawn in red; nothing is enforced.

use dioxus::prelude::*;

/// Label with optional required marker
#[component]
pub fn FieldLabel(
    /// Id of the labelled input
    target: String,
    text: String,
    #[props(default = false)] required: bool,
) -> Element {
    let class = label_class(required);
    rsx! {
        label { class: "{class}", r#for: "{target}", "{text}" }
    }
}

fn label_class(required: bool) -> &'static str {
    if required {
        "input-label input-label--required"
    } else {
        "input-label"
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Input id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Marks the label as required
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "title".to_string(),
///         value: form.read().draft().text("title").to_string(),
///         oninput: move |s| { let _ = form.write().set("title", FieldValue::Text(s)); },
///         label: "Title".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                FieldLabel { target: props.id.clone(), text: label.clone(), required: props.required }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    /// Key handler (used for editor shortcuts)
    #[props(default)]
    pub onkeydown: Option<EventHandler<KeyboardEvent>>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                FieldLabel { target: props.id.clone(), text: label.clone(), required: props.required }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea {extra_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e| {
                    if let Some(handler) = &props.onkeydown {
                        handler.call(e);
                    }
                },
            }
        }
    }
}

/// Color picker with a swatch of the current value
#[component]
pub fn ColorInput(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "form-field",
            FieldLabel { target: id.clone(), text: label }
            div { class: "color-input-row",
                div { class: "color-swatch", style: "background-color: {value};" }
                input {
                    id: "{id}",
                    class: "input-field color-input",
                    r#type: "color",
                    value: "{value}",
                    oninput: move |e| oninput.call(e.value()),
                }
            }
        }
    }
}

/// Search box for the related-content picker
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    #[props(default)]
    pub label: Option<String>,
    #[props(default = "Search articles, recipes, or videos...".to_string())]
    pub placeholder: String,
}

/// The lookup service behind this box is not part of the app, so the box
/// keeps its own text only.
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                span { class: "input-label", "{label}" }
            }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_label_class() {
        assert_eq!(label_class(false), "input-label");
        assert_eq!(label_class(true), "input-label input-label--required");
    }
}
