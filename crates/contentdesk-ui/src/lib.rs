//! Content Desk UI Components
//!
//! Dioxus primitives shared by the card editor and the entity dialogs.
//!
//! ## Look
//!
//! A plain admin palette:
//! - **Blue (#3b82f6)**: primary actions, focus rings
//! - **Green (#16a34a)**: save buttons
//! - **Orange (#f97316)**: attention markers on tabs and helpers
//! - **Red (#dc2626)**: labels of fields marked as required

pub mod components;

pub use components::*;
