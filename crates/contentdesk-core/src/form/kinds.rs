//! Entity kinds and their form schemas

use std::fmt;

use serde::{Deserialize, Serialize};

use super::schema::{FieldSpec, FieldValue, FormSchema};

pub const ARTICLE_TAGS: &[&str] = &["health", "wellness", "fitness"];
pub const TIP_TYPES: &[&str] = &["Expert Tip", "Quick Tip", "Daily Tip"];
pub const CARD_LINK_TYPES: &[&str] = &["No link", "External link", "Internal link"];
pub const CARD_TEMPLATES: &[&str] = &["flexible-card", "basic-card", "advanced-card"];
pub const MEDIA_CAROUSEL_SLOTS: &[&str] = &["video", "image", "template"];

/// Kinds of authored content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Article,
    Tip,
    Collection,
    HtmlCard,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Article,
        EntityKind::Tip,
        EntityKind::Collection,
        EntityKind::HtmlCard,
    ];

    /// Display name, e.g. "HTML Card"
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Article => "Article",
            EntityKind::Tip => "Tip",
            EntityKind::Collection => "Collection",
            EntityKind::HtmlCard => "HTML Card",
        }
    }

    /// Dialog title when creating
    pub fn new_title(&self) -> &'static str {
        match self {
            EntityKind::Article => "New Article",
            EntityKind::Tip => "New Tip",
            EntityKind::Collection => "Add Collection",
            EntityKind::HtmlCard => "New HTML Card",
        }
    }

    /// Dialog title when editing
    pub fn edit_title(&self) -> &'static str {
        match self {
            EntityKind::Article => "Edit Article",
            EntityKind::Tip => "Edit Tip",
            EntityKind::Collection => "Edit Collection",
            EntityKind::HtmlCard => "Edit HTML Card",
        }
    }

    pub fn schema(&self) -> FormSchema {
        match self {
            EntityKind::Article => article_schema(),
            EntityKind::Tip => tip_schema(),
            EntityKind::Collection => collection_schema(),
            EntityKind::HtmlCard => html_card_schema(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Likes/save/close/history toggles shared by articles and tips
fn engagement_flags() -> Vec<FieldSpec> {
    vec![
        FieldSpec::flag("allowLikes", "Allow likes", true),
        FieldSpec::flag("allowSave", "Allow save", true),
        FieldSpec::flag("allowClose", "Allow close", true),
        FieldSpec::flag("hideInUserHistory", "Hide in user history", false),
    ]
}

fn article_schema() -> FormSchema {
    let mut fields = vec![
        FieldSpec::text("title", "Title")
            .required()
            .placeholder("Article Title"),
        FieldSpec::long_text("description", "Description")
            .required()
            .placeholder("Content description (required)"),
    ];
    fields.extend(engagement_flags());
    fields.extend([
        FieldSpec::choice("tag", "Tag", ARTICLE_TAGS, "").placeholder("Select tag"),
        FieldSpec::flag("isPrivate", "Private", false),
        FieldSpec::list("companies", "Companies"),
    ]);
    FormSchema::new(EntityKind::Article, fields)
}

fn tip_schema() -> FormSchema {
    let mut fields = vec![
        FieldSpec::choice("tipType", "Tip type", TIP_TYPES, "Expert Tip"),
        FieldSpec::text("title", "Title").placeholder("New tip title"),
        FieldSpec::long_text("content", "Content").placeholder("New tip text"),
        FieldSpec::text("author", "Author").when_new(FieldValue::text("New Author")),
        FieldSpec::text("authorTagline", "Author Tagline")
            .when_new(FieldValue::text("AUTHOR TAGLINE")),
        FieldSpec::date("expiresAt", "Expires at").when_new(FieldValue::text("09/03/2024")),
    ];
    fields.extend(engagement_flags());
    fields.extend([
        FieldSpec::flag("isPrivate", "Private", false),
        FieldSpec::list("tags", "Tags"),
    ]);
    FormSchema::new(EntityKind::Tip, fields)
}

fn collection_schema() -> FormSchema {
    FormSchema::new(
        EntityKind::Collection,
        vec![
            FieldSpec::text("name", "Name")
                .required()
                .placeholder("Name (required)"),
            FieldSpec::long_text("description", "Description").placeholder("Short Description"),
            FieldSpec::color("backgroundColor", "Background color", "#000000"),
            FieldSpec::color("fontColor", "Font color", "#000000"),
            FieldSpec::flag("isPrivate", "Private", false),
        ],
    )
}

fn html_card_schema() -> FormSchema {
    FormSchema::new(
        EntityKind::HtmlCard,
        vec![
            FieldSpec::text("name", "Name").placeholder("Card name"),
            FieldSpec::choice("type", "Type", CARD_LINK_TYPES, "No link"),
            FieldSpec::choice("template", "Template", CARD_TEMPLATES, "flexible-card"),
            FieldSpec::group("mediaCarousel", "Media carousel", MEDIA_CAROUSEL_SLOTS),
            FieldSpec::text("author", "Author").placeholder("Author name"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemas_have_unique_keys() {
        for kind in EntityKind::ALL {
            let schema = kind.schema();
            let mut keys: Vec<_> = schema.keys().collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate key in {} schema", kind);
            assert_eq!(schema.kind, kind);
        }
    }

    #[test]
    fn titles() {
        assert_eq!(EntityKind::Collection.new_title(), "Add Collection");
        assert_eq!(EntityKind::HtmlCard.edit_title(), "Edit HTML Card");
    }

    #[test]
    fn article_marks_required_fields() {
        let schema = EntityKind::Article.schema();
        let required: Vec<_> = schema.fields.iter().filter(|f| f.required).map(|f| f.key).collect();
        assert_eq!(required, vec!["title", "description"]);
    }

    #[test]
    fn serde_names() {
        assert_eq!(serde_json::to_string(&EntityKind::HtmlCard).unwrap(), "\"html_card\"");
    }
}
