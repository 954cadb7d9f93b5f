//! Modal Dialog Component
//!
//! Overlay plus centered panel. Clicking the overlay closes the dialog,
//! clicks inside the panel do not.

use dioxus::prelude::*;

/// Dialog width presets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DialogWidth {
    #[default]
    Wide,
    ExtraWide,
}

impl DialogWidth {
    pub fn class(&self) -> &'static str {
        match self {
            DialogWidth::Wide => "dialog dialog--wide",
            DialogWidth::ExtraWide => "dialog dialog--xwide",
        }
    }
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Dialog {
///         open: show(),
///         title: "New Article".to_string(),
///         on_close: move |_| show.set(false),
///         p { "body" }
///     }
/// }
/// ```
#[component]
pub fn Dialog(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] width: DialogWidth,
    /// Buttons shown on the right of the title bar
    #[props(default)]
    actions: Option<Element>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "{width.class()}",
                role: "dialog",
                "aria-label": "{title}",
                onclick: move |e| e.stop_propagation(),

                header { class: "dialog-header",
                    h2 { class: "dialog-title", "{title}" }
                    if let Some(actions) = actions {
                        div { class: "dialog-actions", {actions} }
                    }
                }

                div { class: "dialog-body", {children} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_classes() {
        assert_eq!(DialogWidth::default().class(), "dialog dialog--wide");
        assert_eq!(DialogWidth::ExtraWide.class(), "dialog dialog--xwide");
    }
}
