//! Remote record shapes
//!
//! Decoded once per response; identifiers and counters arrive as JSON
//! numbers, names as strings, tag sets as string lists. A field of an
//! unexpected shape fails the decode instead of surfacing later during
//! state mapping.

use serde::Deserialize;
use serde_json::Number;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubnetRecord {
    #[serde(default)]
    pub subnet_id: Option<Number>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub mask_bits: Option<Number>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<Number>,
    #[serde(default)]
    pub parent_vlan_id: Option<Number>,
    #[serde(default)]
    pub parent_vlan_name: Option<String>,
    #[serde(default)]
    pub parent_vlan_number: Option<Number>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpRecord {
    #[serde(default)]
    pub id: Option<Number>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub subnet_id: Option<Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VlanRecord {
    #[serde(default)]
    pub vlan_id: Option<Number>,
    #[serde(default)]
    pub number: Option<Number>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// List responses wrap the records under a resource-named key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubnetList {
    #[serde(default)]
    pub subnets: Vec<SubnetRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IpList {
    #[serde(default)]
    pub ips: Vec<IpRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VlanList {
    #[serde(default)]
    pub vlans: Vec<VlanRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subnet_record_decodes_mixed_types() {
        let record: SubnetRecord = serde_json::from_value(json!({
            "subnet_id": 1102,
            "network": "10.1.2.0",
            "mask_bits": 24,
            "name": "lab",
            "customer_id": null,
            "parent_vlan_id": 7,
            "parent_vlan_name": "lab-vlan",
            "parent_vlan_number": 107,
            "tags": ["a", "b"],
            "allocated": "yes"
        }))
        .unwrap();

        assert_eq!(record.subnet_id.unwrap().as_i64(), Some(1102));
        assert_eq!(record.mask_bits.unwrap().to_string(), "24");
        assert_eq!(record.customer_id, None);
        assert_eq!(record.tags.unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_list_wrappers_tolerate_envelope_noise() {
        let list: VlanList = serde_json::from_value(json!({
            "total_count": 2,
            "vlans": [
                {"vlan_id": 1, "number": 100, "name": "v100"},
                {"vlan_id": 2, "number": 101}
            ]
        }))
        .unwrap();
        assert_eq!(list.vlans.len(), 2);
        assert_eq!(list.vlans[1].name, None);
    }

    #[test]
    fn test_wrong_shape_is_rejected_at_decode() {
        // A tag set must be a list, never a joined string.
        let result: Result<VlanRecord, _> =
            serde_json::from_value(json!({"vlan_id": 1, "tags": "a,b"}));
        assert!(result.is_err());
    }
}
