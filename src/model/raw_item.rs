use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a REST collection response, kept untyped until normalization.
///
/// WordPress sites differ in which fields they expose (plugins add fields,
/// `_fields` filters remove them), so nothing is required at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawItem(Value);

impl RawItem {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// Looks up a field exactly as sent, `null` included.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Looks up a field, treating an explicit `null` the same as absence.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|v| !v.is_null())
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for RawItem {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A text field that comes in one of two shapes depending on API version and
/// request context: `{"rendered": "..."}` or a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedField {
    /// Object shape; `None` when `rendered` is absent or null.
    Rendered(Option<String>),
    /// Flat scalar shape.
    Plain(String),
}

impl RenderedField {
    /// Classifies a field value. Returns `None` for shapes that carry no text
    /// at all (numbers, arrays, booleans).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::Rendered(
                map.get("rendered").and_then(Value::as_str).map(str::to_owned),
            )),
            Value::String(s) => Some(Self::Plain(s.clone())),
            _ => None,
        }
    }

    /// The text this field resolves to, if any.
    pub fn resolve(self) -> Option<String> {
        match self {
            Self::Rendered(rendered) => rendered,
            Self::Plain(text) => Some(text),
        }
    }
}
