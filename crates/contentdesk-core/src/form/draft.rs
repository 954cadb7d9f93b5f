//! Entity drafts

use serde_json::{Map, Value};

use super::schema::{FieldValue, FormSchema};

/// A form's working copy of an entity
pub type Entity = Value;

/// Field values in schema order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityDraft {
    fields: Vec<(&'static str, FieldValue)>,
}

impl EntityDraft {
    /// Draft for a brand-new entity
    pub fn blank(schema: &FormSchema) -> Self {
        Self {
            fields: schema.fields.iter().map(|f| (f.key, f.initial())).collect(),
        }
    }

    /// Draft seeded from an existing entity's fields
    pub fn seeded(schema: &FormSchema, entity: &Map<String, Value>) -> Self {
        Self {
            fields: schema
                .fields
                .iter()
                .map(|f| (f.key, f.seed(entity.get(f.key))))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Text value, or `""` for non-text and unknown fields
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Flag value, or `false` for non-flag and unknown fields
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub(crate) fn replace(&mut self, key: &str, value: FieldValue) -> bool {
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn to_entity(&self) -> Entity {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_json()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::EntityKind;
    use serde_json::json;

    #[test]
    fn blank_tip_uses_new_defaults() {
        let draft = EntityDraft::blank(&EntityKind::Tip.schema());
        assert_eq!(draft.text("author"), "New Author");
        assert_eq!(draft.text("authorTagline"), "AUTHOR TAGLINE");
        assert_eq!(draft.text("expiresAt"), "09/03/2024");
        assert_eq!(draft.text("tipType"), "Expert Tip");
        assert!(draft.flag("allowLikes"));
    }

    #[test]
    fn seeded_tip_without_author_is_blank() {
        let entity = json!({"title": "Hydrate"});
        let draft = EntityDraft::seeded(&EntityKind::Tip.schema(), entity.as_object().unwrap());
        assert_eq!(draft.text("title"), "Hydrate");
        assert_eq!(draft.text("author"), "");
    }

    #[test]
    fn entity_round_trips_schema_keys() {
        let draft = EntityDraft::blank(&EntityKind::Collection.schema());
        let entity = draft.to_entity();
        assert_eq!(entity["backgroundColor"], json!("#000000"));
        assert_eq!(entity["isPrivate"], json!(false));
        assert_eq!(entity.as_object().unwrap().len(), 5);
    }

    #[test]
    fn accessors_tolerate_unknown_keys() {
        let draft = EntityDraft::blank(&EntityKind::Article.schema());
        assert_eq!(draft.text("missing"), "");
        assert!(!draft.flag("title"));
    }
}
