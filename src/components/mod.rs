//! UI components for Content Desk.

mod card_editor;
mod entity_form;

pub use card_editor::HtmlCardEditor;
pub use entity_form::EntityFormDialog;
