//! Resource schema declarations
//!
//! Each resource kind declares its field table once; the host framework
//! renders it into a planning diff and enforces the structural flags
//! (required/computed/force-new, conflicts, defaults). The provider only
//! supplies the declarations plus the per-field hooks.

use indexmap::IndexMap;

use ipam_shared_types::FieldValue;

/// Wire type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Str,
    Bool,
}

/// Per-field value validator, run by the host before planning.
pub type FieldValidator = fn(&str) -> bool;

/// Per-field diff suppressor: `true` means old and new are semantically
/// equal and the host must not plan an update for this field.
pub type DiffSuppress = fn(&str, &str) -> bool;

/// Declaration of a single schema field.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub description: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    /// A change to this field replaces the resource instead of updating it.
    pub force_new: bool,
    pub default: Option<FieldValue>,
    pub conflicts_with: &'static [&'static str],
    pub required_with: &'static [&'static str],
    pub validate: Option<FieldValidator>,
    pub diff_suppress: Option<DiffSuppress>,
}

impl FieldSchema {
    pub fn string(description: &'static str) -> Self {
        Self::new(description, FieldType::Str)
    }

    pub fn boolean(description: &'static str) -> Self {
        Self::new(description, FieldType::Bool)
    }

    fn new(description: &'static str, field_type: FieldType) -> Self {
        Self {
            description,
            field_type,
            required: false,
            optional: false,
            computed: false,
            force_new: false,
            default: None,
            conflicts_with: &[],
            required_with: &[],
            validate: None,
            diff_suppress: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn default_bool(mut self, value: bool) -> Self {
        self.default = Some(FieldValue::Bool(value));
        self
    }

    pub fn conflicts_with(mut self, fields: &'static [&'static str]) -> Self {
        self.conflicts_with = fields;
        self
    }

    pub fn required_with(mut self, fields: &'static [&'static str]) -> Self {
        self.required_with = fields;
        self
    }

    pub fn validate(mut self, validator: FieldValidator) -> Self {
        self.validate = Some(validator);
        self
    }

    pub fn diff_suppress(mut self, suppress: DiffSuppress) -> Self {
        self.diff_suppress = Some(suppress);
        self
    }
}

/// Ordered field table of one resource or data source kind.
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub type_name: &'static str,
    pub description: &'static str,
    pub fields: IndexMap<&'static str, FieldSchema>,
}

impl ResourceSchema {
    pub fn new(type_name: &'static str, description: &'static str) -> Self {
        Self {
            type_name,
            description,
            fields: IndexMap::new(),
        }
    }

    pub fn field(mut self, name: &'static str, field: FieldSchema) -> Self {
        self.fields.insert(name, field);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    /// Diff-suppression entry point for the host: `true` when the field's
    /// hook declares old and new semantically equal.
    pub fn suppresses_diff(&self, field: &str, old: &str, new: &str) -> bool {
        self.get(field)
            .and_then(|f| f.diff_suppress)
            .map(|suppress| suppress(old, new))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_list::fake_list_equal;

    fn sample_schema() -> ResourceSchema {
        ResourceSchema::new("ipam_vlan", "Manage IPAM vlans.")
            .field("name", FieldSchema::string("Name.").computed().optional())
            .field(
                "tags",
                FieldSchema::string("Tags.")
                    .computed()
                    .optional()
                    .diff_suppress(fake_list_equal),
            )
            .field(
                "check_if_exists",
                FieldSchema::boolean("Use to check if vlan exists already.")
                    .optional()
                    .default_bool(false),
            )
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let schema = sample_schema();
        let names: Vec<&str> = schema.fields.keys().copied().collect();
        assert_eq!(names, vec!["name", "tags", "check_if_exists"]);
    }

    #[test]
    fn test_diff_suppression_routed_through_schema() {
        let schema = sample_schema();
        assert!(schema.suppresses_diff("tags", "a,b", "b,,a"));
        assert!(!schema.suppresses_diff("tags", "a,b", "a,c"));
        // Fields without a hook never suppress.
        assert!(!schema.suppresses_diff("name", "x", "x"));
    }

    #[test]
    fn test_boolean_default() {
        let schema = sample_schema();
        let field = schema.get("check_if_exists").unwrap();
        assert_eq!(field.field_type, FieldType::Bool);
        assert_eq!(field.default, Some(FieldValue::Bool(false)));
    }
}
