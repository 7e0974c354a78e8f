//! Document, update, and filter types for the remote store

use crate::ids::DocumentId;
use serde_json::Value;

/// The fields of a document (a JSON object)
pub type Fields = serde_json::Map<String, Value>;

/// A document read back from the remote store
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Fields,
}

impl Document {
    pub fn new(id: DocumentId, fields: Fields) -> Self {
        Self { id, fields }
    }

    /// Get a field value by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// A single-field update instruction
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    /// Replace the whole field with the given value
    Set(Value),
    /// Append the given elements to an array field, without duplicate
    /// checking. A missing field is treated as an empty array.
    ArrayUnion(Vec<Value>),
}

/// An equality filter on one document field
#[derive(Debug, Clone)]
pub struct Filter {
    field: String,
    value: Value,
}

impl Filter {
    /// Match documents whose `field` equals `value`
    pub fn field_eq(field: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.into(),
            value,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Check whether the given fields satisfy this filter
    pub fn matches(&self, fields: &Fields) -> bool {
        fields.get(&self.field) == Some(&self.value)
    }
}
