//! Field schemas
//!
//! A form is described by an ordered list of [`FieldSpec`]s. Each spec knows
//! how to seed its value from an existing entity.

use serde_json::Value;

use super::kinds::EntityKind;

/// Editor widget and value shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text
    LongText,
    /// One of a fixed set of options
    Choice(&'static [&'static str]),
    /// `#rrggbb` color
    Color,
    /// Date string
    Date,
    /// Checkbox
    Flag,
    /// List of strings managed by an external picker
    List,
    /// Named checkboxes stored together
    Group(&'static [&'static str]),
}

impl FieldKind {
    /// Name of the value shape this kind stores
    pub fn value_name(&self) -> &'static str {
        match self {
            FieldKind::Text
            | FieldKind::LongText
            | FieldKind::Choice(_)
            | FieldKind::Color
            | FieldKind::Date => "text",
            FieldKind::Flag => "flag",
            FieldKind::List => "list",
            FieldKind::Group(_) => "group",
        }
    }

    pub fn is_text(&self) -> bool {
        self.value_name() == "text"
    }
}

/// A draft field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
    Group(Vec<(String, bool)>),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Flag(_) => "flag",
            FieldValue::List(_) => "list",
            FieldValue::Group(_) => "group",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            FieldValue::Group(members) => Value::Object(
                members
                    .iter()
                    .map(|(name, on)| (name.clone(), Value::Bool(*on)))
                    .collect(),
            ),
        }
    }
}

/// One field of a form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Used when an existing entity lacks the field
    pub default: FieldValue,
    /// Used instead of `default` when creating a new entity
    pub new_default: Option<FieldValue>,
    /// Marked as required in the UI; not enforced
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    fn with_kind(key: &'static str, label: &'static str, kind: FieldKind, default: FieldValue) -> Self {
        Self {
            key,
            label,
            kind,
            default,
            new_default: None,
            required: false,
            placeholder: None,
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::with_kind(key, label, FieldKind::Text, FieldValue::text(""))
    }

    pub fn long_text(key: &'static str, label: &'static str) -> Self {
        Self::with_kind(key, label, FieldKind::LongText, FieldValue::text(""))
    }

    pub fn choice(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self::with_kind(key, label, FieldKind::Choice(options), FieldValue::text(default))
    }

    pub fn color(key: &'static str, label: &'static str, default: &'static str) -> Self {
        Self::with_kind(key, label, FieldKind::Color, FieldValue::text(default))
    }

    pub fn date(key: &'static str, label: &'static str) -> Self {
        Self::with_kind(key, label, FieldKind::Date, FieldValue::text(""))
    }

    pub fn flag(key: &'static str, label: &'static str, default: bool) -> Self {
        Self::with_kind(key, label, FieldKind::Flag, FieldValue::Flag(default))
    }

    pub fn list(key: &'static str, label: &'static str) -> Self {
        Self::with_kind(key, label, FieldKind::List, FieldValue::List(Vec::new()))
    }

    pub fn group(key: &'static str, label: &'static str, members: &'static [&'static str]) -> Self {
        let default = members.iter().map(|m| (m.to_string(), false)).collect();
        Self::with_kind(key, label, FieldKind::Group(members), FieldValue::Group(default))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub fn when_new(mut self, value: FieldValue) -> Self {
        self.new_default = Some(value);
        self
    }

    /// Value for a brand-new entity
    pub fn initial(&self) -> FieldValue {
        self.new_default.clone().unwrap_or_else(|| self.default.clone())
    }

    /// Value seeded from an existing entity's raw field.
    ///
    /// Only a missing or `null` field falls back to the default; `false` and
    /// `0` are kept. Text fields also treat the empty string as missing.
    pub fn seed(&self, raw: Option<&Value>) -> FieldValue {
        let raw = match raw {
            None | Some(Value::Null) => return self.default.clone(),
            Some(raw) => raw,
        };

        match self.kind {
            FieldKind::Flag => match raw {
                Value::Bool(b) => FieldValue::Flag(*b),
                Value::Number(n) => FieldValue::Flag(n.as_f64().is_some_and(|n| n != 0.0)),
                _ => self.default.clone(),
            },
            FieldKind::List => match raw {
                Value::Array(items) => FieldValue::List(items.iter().map(json_to_text).collect()),
                _ => self.default.clone(),
            },
            FieldKind::Group(members) => match raw {
                Value::Object(map) => FieldValue::Group(
                    members
                        .iter()
                        .map(|m| {
                            let on = map.get(*m).and_then(Value::as_bool).unwrap_or(false);
                            (m.to_string(), on)
                        })
                        .collect(),
                ),
                _ => self.default.clone(),
            },
            _ => match raw {
                Value::String(s) if s.is_empty() => self.default.clone(),
                Value::String(_) | Value::Number(_) | Value::Bool(_) => {
                    FieldValue::Text(json_to_text(raw))
                }
                _ => self.default.clone(),
            },
        }
    }

    /// Whether `value` has the shape this field stores
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (&self.kind, value) {
            (FieldKind::Group(members), FieldValue::Group(given)) => {
                given.len() == members.len()
                    && given.iter().zip(members.iter()).all(|((name, _), m)| name == m)
            }
            _ => self.kind.value_name() == value.kind_name(),
        }
    }
}

fn json_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Ordered field list for one entity kind
#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    pub kind: EntityKind,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(kind: EntityKind, fields: Vec<FieldSpec>) -> Self {
        Self { kind, fields }
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flag_keeps_falsy_values() {
        let spec = FieldSpec::flag("allowLikes", "Allow likes", true);
        assert_eq!(spec.seed(Some(&json!(false))), FieldValue::Flag(false));
        assert_eq!(spec.seed(Some(&json!(0))), FieldValue::Flag(false));
        assert_eq!(spec.seed(Some(&json!(1))), FieldValue::Flag(true));
        assert_eq!(spec.seed(Some(&Value::Null)), FieldValue::Flag(true));
        assert_eq!(spec.seed(None), FieldValue::Flag(true));
    }

    #[test]
    fn text_treats_empty_as_missing() {
        let spec = FieldSpec::choice("tipType", "Tip type", &["Expert Tip", "Quick Tip"], "Expert Tip");
        assert_eq!(spec.seed(Some(&json!(""))), FieldValue::text("Expert Tip"));
        assert_eq!(spec.seed(Some(&json!("Quick Tip"))), FieldValue::text("Quick Tip"));
        assert_eq!(spec.seed(Some(&json!(42))), FieldValue::text("42"));
        assert_eq!(spec.seed(Some(&json!({"nested": true}))), FieldValue::text("Expert Tip"));
    }

    #[test]
    fn list_keeps_empty_array() {
        let spec = FieldSpec::list("tags", "Tags");
        assert_eq!(spec.seed(Some(&json!([]))), FieldValue::List(vec![]));
        assert_eq!(
            spec.seed(Some(&json!(["a", 7]))),
            FieldValue::List(vec!["a".to_string(), "7".to_string()])
        );
        assert_eq!(spec.seed(Some(&json!("a"))), FieldValue::List(vec![]));
    }

    #[test]
    fn group_reads_members_in_order() {
        let spec = FieldSpec::group("mediaCarousel", "Media carousel", &["video", "image", "template"]);
        let seeded = spec.seed(Some(&json!({"image": true, "extra": true})));
        assert_eq!(
            seeded,
            FieldValue::Group(vec![
                ("video".to_string(), false),
                ("image".to_string(), true),
                ("template".to_string(), false),
            ])
        );
        assert!(spec.accepts(&seeded));
        assert!(!spec.accepts(&FieldValue::Group(vec![("video".to_string(), true)])));
    }

    #[test]
    fn new_default_only_for_new_entities() {
        let spec = FieldSpec::text("author", "Author").when_new(FieldValue::text("New Author"));
        assert_eq!(spec.initial(), FieldValue::text("New Author"));
        assert_eq!(spec.seed(None), FieldValue::text(""));
    }

    #[test]
    fn accepts_by_shape() {
        let spec = FieldSpec::color("fontColor", "Font color", "#000000");
        assert!(spec.accepts(&FieldValue::text("#ffffff")));
        assert!(!spec.accepts(&FieldValue::Flag(true)));
    }

    #[test]
    fn group_value_to_json() {
        let value = FieldValue::Group(vec![("video".to_string(), true)]);
        assert_eq!(value.to_json(), json!({"video": true}));
    }
}
