//! Reusable UI components
//!
//! Class names match the stylesheet in the desktop crate's theme.

mod badge;
mod button;
mod checkbox;
mod input;
mod modal;
mod select;

pub use badge::*;
pub use button::*;
pub use checkbox::*;
pub use input::*;
pub use modal::*;
pub use select::*;
