use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

use crate::error::SourceError;

pub const ERROR_FIELD: &str = "error";
pub const STATUS_FIELD: &str = "status";

/// One source's contribution to a search result.
///
/// Serialises as a flat object: `source` first, then the source-specific
/// fields in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub source: String,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl SourceRecord {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(source).with(ERROR_FIELD, message.into())
    }

    pub fn from_error(source: impl Into<String>, err: &SourceError) -> Self {
        Self::error(source, err.to_string())
    }

    /// A record that carries a verdict rather than data, e.g. "not associated".
    pub fn status(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(source).with(STATUS_FIELD, message.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.get_str(ERROR_FIELD)
    }

    pub fn is_error(&self) -> bool {
        self.fields.contains_key(ERROR_FIELD)
    }
}
