use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single resource field value.
///
/// The declared schemas only use string and boolean fields; everything the
/// remote system hands back (ids, VLAN numbers, mask bits) crosses this
/// layer as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Bool(bool),
}

/// Mutable per-instance resource state.
///
/// Owned by the host framework and handed to each lifecycle call. The id is
/// the remote record identifier; a cleared id signals the instance is gone.
/// Field order follows insertion order so diff rendering stays stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceState {
    id: Option<String>,
    fields: IndexMap<String, FieldValue>,
}

impl ResourceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    pub fn clear_id(&mut self) {
        self.id = None;
    }

    /// String value of a field, if set and non-empty.
    ///
    /// Empty strings count as unset, matching the host's zero-value
    /// convention for optional fields.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(FieldValue::Str(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Boolean value of a field; unset reads as false.
    pub fn get_bool(&self, field: &str) -> bool {
        matches!(self.fields.get(field), Some(FieldValue::Bool(true)))
    }

    pub fn set_str(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(field.into(), FieldValue::Str(value.into()));
    }

    pub fn set_bool(&mut self, field: impl Into<String>, value: bool) {
        self.fields.insert(field.into(), FieldValue::Bool(value));
    }

    pub fn fields(&self) -> &IndexMap<String, FieldValue> {
        &self.fields
    }
}
