use anyhow::Result;
use serde_json::Number;

use ipam_core::ProviderError;
use ipam_shared_types::ResourceState;

/// Owned copy of a set, non-empty string field.
pub(crate) fn owned(state: &ResourceState, field: &str) -> Option<String> {
    state.get_str(field).map(str::to_string)
}

pub(crate) fn require_id(state: &ResourceState, resource: &'static str) -> Result<String> {
    state.id().map(str::to_string).ok_or_else(|| {
        ProviderError::Configuration {
            message: format!("{} state carries no identifier", resource),
        }
        .into()
    })
}

pub(crate) fn numeric_id(id: &str, resource: &'static str) -> Result<i64> {
    id.parse().map_err(|_| {
        ProviderError::Configuration {
            message: format!("invalid {} identifier {:?}", resource, id),
        }
        .into()
    })
}

pub(crate) fn number_string(number: &Option<Number>) -> Option<String> {
    number.as_ref().map(Number::to_string)
}
