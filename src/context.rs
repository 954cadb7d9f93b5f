//! Shared app state provided through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let config = app_config();
//! let mut save = use_save_boundary();
//! ```

use std::path::PathBuf;

use contentdesk_core::{Entity, EntityKind, LoggingSave, RenderMode};
use dioxus::prelude::*;

/// Page shown at launch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StartPage {
    #[default]
    Library,
    Editor,
}

/// Configuration parsed from the command line
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Preview rendering for the card editor
    pub render_mode: RenderMode,
    /// Downloads go straight here when set
    pub export_dir: Option<PathBuf>,
    pub start: StartPage,
}

/// Get the app configuration.
pub fn app_config() -> &'static AppConfig {
    crate::app_config()
}

/// A draft the save stand-in accepted
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub kind: EntityKind,
    pub entity: Entity,
}

/// Hook to access the save stand-in shared by every dialog.
pub fn use_save_boundary() -> Signal<LoggingSave> {
    use_context::<Signal<LoggingSave>>()
}

/// Hook to access the list of accepted submissions, newest first.
pub fn use_submissions() -> Signal<Vec<Submission>> {
    use_context::<Signal<Vec<Submission>>>()
}

/// Launch page that has not been applied yet.
///
/// The library page takes this once on first mount and navigates to the
/// editor if asked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingStart(pub Option<StartPage>);

pub fn use_pending_start() -> Signal<PendingStart> {
    use_context::<Signal<PendingStart>>()
}
