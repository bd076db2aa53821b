//! Request parameters
//!
//! Immutable values built in one step from validated state, serialized as
//! query strings (filters) or form bodies (writes). Unset fields are
//! omitted from the wire entirely.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SubnetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_bits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

/// Create and update share the subnet upsert endpoint; an update carries
/// the target `subnet_id`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubnetWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_bits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_vlan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChildSubnetCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask_bits: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuggestIpQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IpFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IpWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipaddress: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VlanFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_and: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VlanWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}
