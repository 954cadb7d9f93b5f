use contentdesk_core::LoggingSave;
use dioxus::prelude::*;

use crate::context::{app_config, PendingStart, Submission};
use crate::pages::{CardEditor, Library};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Content library with the entity dialogs
/// - `/editor` - Standalone HTML card editor
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Library {},
    #[route("/editor")]
    CardEditor {},
}

/// Root application component.
///
/// Provides global styles, shared form state, and routing.
#[component]
pub fn App() -> Element {
    let save: Signal<LoggingSave> = use_signal(LoggingSave::new);
    let submissions: Signal<Vec<Submission>> = use_signal(Vec::new);
    let pending_start = use_signal(|| PendingStart(Some(app_config().start)));

    use_context_provider(|| save);
    use_context_provider(|| submissions);
    use_context_provider(|| pending_start);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
