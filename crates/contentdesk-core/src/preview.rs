//! HTML preview rendering
//!
//! A preview is a snapshot of the editor's source taken on demand. The
//! snapshot keeps the source it was rendered from next to the markup that is
//! actually inserted into the preview pane.
//!
//! ## Trust boundary
//!
//! [`RenderMode::Raw`] inserts the author's markup verbatim, scripts and
//! event handlers included. It is only suitable for self-authored input.
//! [`RenderMode::Sanitized`] is the default.

use std::fmt;
use std::str::FromStr;

use ammonia::{clean_text, Builder};
use serde::{Deserialize, Serialize};

/// Shown in the preview pane before anything has been rendered.
pub const EMPTY_PREVIEW_HINT: &str = "Click \"Preview\" to see your HTML rendered here";

/// Shown when a rendered preview has no markup left after sanitizing.
pub const SANITIZED_AWAY_HINT: &str = "Nothing to show: the sanitizer removed all of this markup";

/// How source text is turned into preview markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Allow-list sanitized; inline styles kept
    #[default]
    Sanitized,
    /// Shown as literal source text
    Escaped,
    /// Inserted verbatim (trusted input only)
    Raw,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Sanitized => "sanitized",
            RenderMode::Escaped => "escaped",
            RenderMode::Raw => "raw",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sanitized" => Ok(RenderMode::Sanitized),
            "escaped" => Ok(RenderMode::Escaped),
            "raw" => Ok(RenderMode::Raw),
            other => Err(format!(
                "unknown render mode '{}' (expected sanitized, escaped or raw)",
                other
            )),
        }
    }
}

/// The markup currently shown in the preview pane
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreviewSnapshot {
    source: String,
    markup: String,
    mode: RenderMode,
}

impl PreviewSnapshot {
    /// Source text this snapshot was rendered from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Markup to insert into the preview pane
    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// True until something has been previewed
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Hint to show in place of the markup, if there is nothing to insert.
    pub fn placeholder(&self) -> Option<&'static str> {
        if self.is_empty() {
            Some(EMPTY_PREVIEW_HINT)
        } else if self.markup.is_empty() {
            Some(SANITIZED_AWAY_HINT)
        } else {
            None
        }
    }
}

/// Turns source text into preview snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewRenderer {
    mode: RenderMode,
}

impl PreviewRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn render(&self, source: &str) -> PreviewSnapshot {
        let markup = match self.mode {
            RenderMode::Sanitized => sanitize(source),
            RenderMode::Escaped => {
                format!("<pre class=\"preview-escaped\">{}</pre>", clean_text(source))
            }
            RenderMode::Raw => source.to_string(),
        };

        PreviewSnapshot {
            source: source.to_string(),
            markup,
            mode: self.mode,
        }
    }
}

/// Allow-list sanitization. Card markup is styled inline and the presets use
/// buttons, so both survive; scripts and `on*` handlers do not.
fn sanitize(source: &str) -> String {
    let mut builder = Builder::default();
    builder
        .add_tags(&["button"])
        .add_generic_attributes(&["style"]);
    builder.clean(source).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_is_verbatim() {
        let src = "<b onclick=\"steal()\">hi</b><script>x()</script>";
        let snap = PreviewRenderer::new(RenderMode::Raw).render(src);
        assert_eq!(snap.markup(), src);
        assert_eq!(snap.source(), src);
        assert_eq!(snap.mode(), RenderMode::Raw);
    }

    #[test]
    fn sanitized_strips_scripts_and_handlers() {
        let snap = PreviewRenderer::default()
            .render("<b onclick=\"steal()\">hi</b><script>alert(1)</script>");
        assert_eq!(snap.markup(), "<b>hi</b>");
        assert_eq!(snap.mode(), RenderMode::Sanitized);
    }

    #[test]
    fn sanitized_keeps_inline_styles_and_buttons() {
        let snap = PreviewRenderer::default()
            .render("<div style=\"color: red\"><button style=\"padding: 4px\">Go</button></div>");
        assert!(snap.markup().contains("style=\"color: red\""));
        assert!(snap.markup().contains("<button"));
        assert!(snap.markup().contains(">Go</button>"));
    }

    #[test]
    fn escaped_shows_source_text() {
        let snap = PreviewRenderer::new(RenderMode::Escaped).render("<b>\"a\" & 'b'</b>");
        let inner = snap
            .markup()
            .strip_prefix("<pre class=\"preview-escaped\">")
            .and_then(|m| m.strip_suffix("</pre>"))
            .unwrap();
        assert!(!inner.contains('<') && !inner.contains('>'));
        assert!(inner.starts_with("&lt;b&gt;&quot;a&quot;"));
        assert!(inner.contains("&amp;"));
    }

    #[test]
    fn empty_snapshot() {
        let snap = PreviewSnapshot::default();
        assert!(snap.is_empty());
        assert!(!PreviewRenderer::default().render("<p>x</p>").is_empty());
    }

    #[test]
    fn placeholder_tells_unrendered_from_sanitized_away() {
        assert_eq!(PreviewSnapshot::default().placeholder(), Some(EMPTY_PREVIEW_HINT));

        let stripped = PreviewRenderer::default().render("<script>alert(1)</script>");
        assert!(!stripped.is_empty());
        assert_eq!(stripped.markup(), "");
        assert_eq!(stripped.placeholder(), Some(SANITIZED_AWAY_HINT));

        let shown = PreviewRenderer::default().render("<p>x</p>");
        assert_eq!(shown.placeholder(), None);
    }

    #[test]
    fn render_mode_parsing() {
        assert_eq!("RAW".parse::<RenderMode>(), Ok(RenderMode::Raw));
        assert_eq!("escaped".parse::<RenderMode>(), Ok(RenderMode::Escaped));
        assert!("unsafe".parse::<RenderMode>().is_err());
        assert_eq!(RenderMode::default().to_string(), "sanitized");
    }
}
