//! Page components for Content Desk.

mod card_editor;
mod library;

pub use card_editor::CardEditor;
pub use library::Library;
