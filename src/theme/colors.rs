//! Colors applied through inline styles. The rest of the palette lives
//! in the stylesheet's custom properties.

/// Screen of the tip phone mock-up
pub const TIP_SCREEN: &str = "#2563eb";
