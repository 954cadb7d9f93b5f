//! Snippet catalog
//!
//! Read-only example cards offered for one-click loading in the editor.

/// A named example markup block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetPreset {
    pub name: &'static str,
    pub code: &'static str,
}

/// Source the editor opens with.
pub const STARTER_CARD: &str = r#"<div style="padding: 20px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); border-radius: 10px; text-align: center; color: white;">
  <h2>Hello World!</h2>
  <p>This is a sample HTML card. Try editing the code!</p>
  <button style="background: white; color: #667eea; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer;">Click me</button>
</div>"#;

/// Example cards, in display order. Reset loads the first one.
pub const CATALOG: &[SnippetPreset] = &[
    SnippetPreset {
        name: "Gradient Card",
        code: r#"<div style="padding: 20px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); border-radius: 10px; text-align: center; color: white;">
  <h2>Gradient Card</h2>
  <p>Beautiful gradient background</p>
</div>"#,
    },
    SnippetPreset {
        name: "Product Card",
        code: r#"<div style="border: 1px solid #ddd; border-radius: 8px; padding: 16px; max-width: 300px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
  <img src="https://via.placeholder.com/250x150" alt="Product" style="width: 100%; border-radius: 4px; margin-bottom: 12px;">
  <h3 style="margin: 0 0 8px 0; color: #333;">Product Name</h3>
  <p style="color: #666; margin: 0 0 12px 0;">Short product description here</p>
  <div style="display: flex; justify-content: space-between; align-items: center;">
    <span style="font-size: 20px; font-weight: bold; color: #e74c3c;">$29.99</span>
    <button style="background: #3498db; color: white; border: none; padding: 8px 16px; border-radius: 4px; cursor: pointer;">Add to Cart</button>
  </div>
</div>"#,
    },
    SnippetPreset {
        name: "Profile Card",
        code: r#"<div style="background: white; border-radius: 12px; padding: 24px; text-align: center; box-shadow: 0 4px 6px rgba(0,0,0,0.1); max-width: 280px;">
  <div style="width: 80px; height: 80px; border-radius: 50%; background: #3498db; margin: 0 auto 16px; display: flex; align-items: center; justify-content: center; color: white; font-size: 24px; font-weight: bold;">JD</div>
  <h3 style="margin: 0 0 4px 0; color: #2c3e50;">John Doe</h3>
  <p style="color: #7f8c8d; margin: 0 0 16px 0;">Frontend Developer</p>
  <div style="display: flex; gap: 8px; justify-content: center;">
    <button style="background: #3498db; color: white; border: none; padding: 6px 12px; border-radius: 4px; font-size: 12px;">Follow</button>
    <button style="background: #ecf0f1; color: #2c3e50; border: none; padding: 6px 12px; border-radius: 4px; font-size: 12px;">Message</button>
  </div>
</div>"#,
    },
];

/// Look up a preset by position.
pub fn get(index: usize) -> Option<&'static SnippetPreset> {
    CATALOG.get(index)
}
