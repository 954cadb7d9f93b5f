//! Entity forms
//!
//! One generic dialog model drives every content kind. The field set comes
//! from the kind's [`FormSchema`]; the dialog only seeds, edits and submits a
//! draft.
//!
//! ## Usage
//!
//! ```ignore
//! let mut form = EntityForm::new(EntityKind::Article);
//! form.open(Some(&json!({"title": "X", "allowLikes": false})))?;
//! form.set("tag", FieldValue::text("health"))?;
//! let saved = form.submit(&mut LoggingSave::new())?;
//! ```

mod draft;
mod kinds;
mod save;
mod schema;

pub use draft::{Entity, EntityDraft};
pub use kinds::{
    EntityKind, ARTICLE_TAGS, CARD_LINK_TYPES, CARD_TEMPLATES, MEDIA_CAROUSEL_SLOTS, TIP_TYPES,
};
pub use save::{LoggingSave, SaveBoundary};
pub use schema::{FieldKind, FieldSpec, FieldValue, FormSchema};

use serde_json::Value;

use crate::error::{ContentError, ContentResult};

/// Modal form state for one entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct EntityForm {
    schema: FormSchema,
    draft: EntityDraft,
    is_open: bool,
    editing: bool,
}

impl EntityForm {
    /// Closed form with a blank draft
    pub fn new(kind: EntityKind) -> Self {
        let schema = kind.schema();
        let draft = EntityDraft::blank(&schema);
        Self {
            schema,
            draft,
            is_open: false,
            editing: false,
        }
    }

    /// Open the dialog, seeding the draft from `existing` when given.
    pub fn open(&mut self, existing: Option<&Entity>) -> ContentResult<()> {
        self.draft = match existing {
            Some(Value::Object(fields)) => EntityDraft::seeded(&self.schema, fields),
            Some(other) => {
                return Err(ContentError::InvalidEntity(format!(
                    "expected a JSON object for {}, got {}",
                    self.schema.kind,
                    json_type(other)
                )))
            }
            None => EntityDraft::blank(&self.schema),
        };
        self.editing = existing.is_some();
        self.is_open = true;
        Ok(())
    }

    /// Update one draft field. The value must have the field's shape.
    pub fn set(&mut self, key: &str, value: FieldValue) -> ContentResult<()> {
        let spec = self
            .schema
            .field(key)
            .ok_or_else(|| ContentError::UnknownField(key.to_string()))?;
        if !spec.accepts(&value) {
            return Err(ContentError::FieldKindMismatch {
                key: key.to_string(),
                expected: spec.kind.value_name(),
            });
        }
        self.draft.replace(key, value);
        Ok(())
    }

    /// Flip a flag field.
    pub fn toggle(&mut self, key: &str) -> ContentResult<()> {
        let current = match self.draft.get(key) {
            Some(FieldValue::Flag(on)) => *on,
            Some(_) => {
                return Err(ContentError::FieldKindMismatch {
                    key: key.to_string(),
                    expected: "flag",
                })
            }
            None => return Err(ContentError::UnknownField(key.to_string())),
        };
        self.set(key, FieldValue::Flag(!current))
    }

    /// Flip one member of a group field.
    pub fn toggle_member(&mut self, key: &str, member: &str) -> ContentResult<()> {
        let mut members = match self.draft.get(key) {
            Some(FieldValue::Group(members)) => members.clone(),
            Some(_) => {
                return Err(ContentError::FieldKindMismatch {
                    key: key.to_string(),
                    expected: "group",
                })
            }
            None => return Err(ContentError::UnknownField(key.to_string())),
        };
        let slot = members
            .iter_mut()
            .find(|(name, _)| name == member)
            .ok_or_else(|| ContentError::UnknownField(format!("{}.{}", key, member)))?;
        slot.1 = !slot.1;
        self.set(key, FieldValue::Group(members))
    }

    /// Hand the draft to `save` and close. On error the dialog stays open.
    pub fn submit(&mut self, save: &mut dyn SaveBoundary) -> ContentResult<Entity> {
        let saved = save.save(self.schema.kind, &self.draft)?;
        self.close();
        Ok(saved)
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self) {
        tracing::debug!(kind = %self.schema.kind, "Form cancelled");
        self.close();
    }

    fn close(&mut self) {
        self.is_open = false;
        self.editing = false;
        self.draft = EntityDraft::blank(&self.schema);
    }

    pub fn title(&self) -> &'static str {
        if self.editing {
            self.schema.kind.edit_title()
        } else {
            self.schema.kind.new_title()
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.schema.kind
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn draft(&self) -> &EntityDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingSave;

    impl SaveBoundary for FailingSave {
        fn save(&mut self, _kind: EntityKind, _draft: &EntityDraft) -> ContentResult<Entity> {
            Err(ContentError::Save("offline".to_string()))
        }
    }

    #[test]
    fn open_new_and_existing() {
        let mut form = EntityForm::new(EntityKind::Article);
        assert!(!form.is_open());

        form.open(None).unwrap();
        assert!(form.is_open());
        assert_eq!(form.title(), "New Article");

        form.open(Some(&json!({"title": "X"}))).unwrap();
        assert_eq!(form.title(), "Edit Article");
        assert_eq!(form.draft().text("title"), "X");
    }

    #[test]
    fn open_rejects_non_objects() {
        let mut form = EntityForm::new(EntityKind::Tip);
        let err = form.open(Some(&json!(["not", "an", "entity"]))).unwrap_err();
        assert!(matches!(err, ContentError::InvalidEntity(_)));
        assert!(!form.is_open());
    }

    #[test]
    fn set_checks_key_and_shape() {
        let mut form = EntityForm::new(EntityKind::Collection);
        form.open(None).unwrap();

        form.set("name", FieldValue::text("Summer")).unwrap();
        assert_eq!(form.draft().text("name"), "Summer");

        assert!(matches!(
            form.set("nope", FieldValue::text("x")),
            Err(ContentError::UnknownField(_))
        ));
        assert!(matches!(
            form.set("isPrivate", FieldValue::text("yes")),
            Err(ContentError::FieldKindMismatch { expected: "flag", .. })
        ));
    }

    #[test]
    fn toggles() {
        let mut form = EntityForm::new(EntityKind::HtmlCard);
        form.open(None).unwrap();
        form.toggle_member("mediaCarousel", "image").unwrap();
        assert_eq!(
            form.draft().get("mediaCarousel").map(FieldValue::to_json),
            Some(json!({"video": false, "image": true, "template": false}))
        );
        assert!(form.toggle("name").is_err());
        assert!(form.toggle_member("mediaCarousel", "audio").is_err());

        let mut tip = EntityForm::new(EntityKind::Tip);
        tip.open(None).unwrap();
        tip.toggle("allowSave").unwrap();
        assert!(!tip.draft().flag("allowSave"));
    }

    #[test]
    fn submit_closes_and_resets() {
        let mut form = EntityForm::new(EntityKind::Article);
        form.open(Some(&json!({"title": "X"}))).unwrap();
        let mut save = LoggingSave::new();

        let saved = form.submit(&mut save).unwrap();
        assert_eq!(saved["title"], json!("X"));
        assert_eq!(save.submissions(), 1);
        assert!(!form.is_open());
        assert_eq!(form.draft().text("title"), "");
    }

    #[test]
    fn failed_submit_keeps_dialog_open() {
        let mut form = EntityForm::new(EntityKind::Article);
        form.open(None).unwrap();
        form.set("title", FieldValue::text("Keep")).unwrap();

        assert!(form.submit(&mut FailingSave).is_err());
        assert!(form.is_open());
        assert_eq!(form.draft().text("title"), "Keep");
    }

    #[test]
    fn cancel_discards() {
        let mut form = EntityForm::new(EntityKind::Tip);
        form.open(None).unwrap();
        form.set("title", FieldValue::text("Draft")).unwrap();
        form.cancel();
        assert!(!form.is_open());
        assert_eq!(form.draft().text("title"), "");
    }
}
