//! Badge Component

use dioxus::prelude::*;

/// Small status pill
#[component]
pub fn Badge(
    /// Filled (active) or muted
    #[props(default = false)]
    active: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let base = if active { "badge badge-active" } else { "badge badge-muted" };
    let extra = class.unwrap_or_default();

    rsx! {
        span { class: "{base} {extra}", {children} }
    }
}
