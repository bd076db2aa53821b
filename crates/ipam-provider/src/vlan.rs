//! VLAN resource

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Number;

use ipam_client::{IpamApi, VlanFilter, VlanRecord, VlanWrite};
use ipam_core::{
    allocate_from_range, fake_list_equal, is_vlan_range, FieldSchema, ProviderError,
    ResourceLifecycle, ResourceSchema,
};
use ipam_shared_types::ResourceState;

use crate::util::{number_string, numeric_id, owned, require_id};

pub struct VlanResource {
    api: Arc<dyn IpamApi>,
}

impl VlanResource {
    pub fn new(api: Arc<dyn IpamApi>) -> Self {
        Self { api }
    }

    pub fn schema() -> ResourceSchema {
        ResourceSchema::new("ipam_vlan", "Manage IPAM vlans.")
            .field("name", FieldSchema::string("Name.").computed().optional())
            .field(
                "number",
                FieldSchema::string("VLAN number.").computed().optional(),
            )
            .field(
                "tags",
                FieldSchema::string("Tags.")
                    .computed()
                    .optional()
                    .diff_suppress(fake_list_equal),
            )
            .field("tags_and", FieldSchema::string("Tags (AND).").optional())
            .field(
                "vlan_id",
                FieldSchema::string("VLAN ID.").computed().optional(),
            )
            .field(
                "create_within_range",
                FieldSchema::string("Use to create vlan from a range of vlans.")
                    .optional()
                    .required_with(&["tags_and", "name"])
                    .conflicts_with(&["number"])
                    .validate(is_vlan_range),
            )
            .field(
                "check_if_exists",
                FieldSchema::boolean("Use to check if vlan exists already.")
                    .optional()
                    .default_bool(false),
            )
    }

    /// Lookup by number and AND-ed tags. Zero matches means the caller
    /// should create; exactly one is adoptable.
    async fn find_existing(&self, state: &ResourceState) -> Result<Option<String>> {
        let filter = VlanFilter {
            number: owned(state, "number"),
            tags_and: owned(state, "tags_and"),
            ..VlanFilter::default()
        };

        let vlans = self.api.list_vlans(&filter).await?;
        match vlans.len() {
            0 => Ok(None),
            1 => match number_string(&vlans[0].vlan_id) {
                Some(id) => Ok(Some(id)),
                None => Err(ProviderError::Configuration {
                    message: "matched vlan carries no vlan_id".to_string(),
                }
                .into()),
            },
            _ => Err(ProviderError::AmbiguousMatch { resource: "vlan" }.into()),
        }
    }

    /// Numbers already tagged in use, fetched immediately before an
    /// allocation. Racing allocations in the same tag scope can still
    /// collide; the remote rejects the loser with a soft error.
    async fn used_numbers(&self, state: &ResourceState) -> Result<Vec<i64>> {
        let filter = VlanFilter {
            tags: owned(state, "tags"),
            ..VlanFilter::default()
        };

        let vlans = self.api.list_vlans(&filter).await?;
        let mut used: Vec<i64> = vlans
            .iter()
            .filter_map(|vlan| vlan.number.as_ref().and_then(Number::as_i64))
            .collect();
        used.sort_unstable();
        Ok(used)
    }

    fn write_params(state: &ResourceState, number: Option<String>) -> VlanWrite {
        VlanWrite {
            number,
            name: owned(state, "name"),
            tags: owned(state, "tags"),
        }
    }
}

fn map_vlan_record(state: &mut ResourceState, record: &VlanRecord) {
    if let Some(name) = &record.name {
        state.set_str("name", name.clone());
    }
    if let Some(number) = number_string(&record.number) {
        state.set_str("number", number);
    }
    if let Some(tags) = &record.tags {
        state.set_str("tags", tags.join(","));
    }
    if let Some(vlan_id) = number_string(&record.vlan_id) {
        state.set_str("vlan_id", vlan_id);
    }
}

#[async_trait]
impl ResourceLifecycle for VlanResource {
    fn type_name(&self) -> &'static str {
        "ipam_vlan"
    }

    fn schema(&self) -> ResourceSchema {
        Self::schema()
    }

    async fn create(&self, state: &mut ResourceState) -> Result<()> {
        // An identifier in the declared state means adoption.
        if let Some(id) = owned(state, "vlan_id") {
            state.set_id(id);
            return self.update(state).await;
        }

        if state.get_bool("check_if_exists") {
            if let Some(id) = self.find_existing(state).await? {
                log::info!("Adopting existing vlan {}", id);
                state.set_id(id);
                return self.update(state).await;
            }
        }

        let mut number = None;
        if let Some(range) = owned(state, "create_within_range") {
            let used = self.used_numbers(state).await?;
            let allocated = allocate_from_range(&range, &used)?;
            log::info!("Allocated VLAN number {} from range {}", allocated, range);
            number = Some(allocated.to_string());
        }
        if let Some(explicit) = owned(state, "number") {
            number = Some(explicit);
        }

        let params = Self::write_params(state, number);
        let ack = self.api.post_vlan(&params).await?;
        ack.ensure_ok()?;
        state.set_id(ack.record_id()?);

        self.read(state).await
    }

    async fn read(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "vlan")?;
        let record = self.api.get_vlan(numeric_id(&id, "vlan")?).await?;
        map_vlan_record(state, &record);
        Ok(())
    }

    async fn update(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "vlan")?;
        let params = Self::write_params(state, owned(state, "number"));
        let ack = self
            .api
            .put_vlan(numeric_id(&id, "vlan")?, &params)
            .await?;
        ack.ensure_ok()?;
        state.set_id(ack.record_id()?);

        self.read(state).await
    }

    async fn delete(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "vlan")?;
        let ack = self.api.delete_vlan(numeric_id(&id, "vlan")?).await?;
        ack.ensure_deleted()?;
        state.clear_id();
        Ok(())
    }
}
