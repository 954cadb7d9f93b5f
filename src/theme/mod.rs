//! Visual theme for Content Desk.

mod colors;
mod styles;

pub use colors::*;
pub use styles::GLOBAL_STYLES;
