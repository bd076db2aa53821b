//! Subnet resource

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use ipam_client::{ChildSubnetCreate, IpamApi, SubnetFilter, SubnetRecord, SubnetWrite};
use ipam_core::{
    fake_list_equal, FieldSchema, ProviderError, ResourceLifecycle, ResourceSchema,
};
use ipam_shared_types::ResourceState;

use crate::util::{number_string, numeric_id, owned, require_id};

pub struct SubnetResource {
    api: Arc<dyn IpamApi>,
}

impl SubnetResource {
    pub fn new(api: Arc<dyn IpamApi>) -> Self {
        Self { api }
    }

    pub fn schema() -> ResourceSchema {
        ResourceSchema::new("ipam_subnet", "Manage IPAM subnets.")
            .field(
                "mask_bits",
                FieldSchema::string("Netmask bits.").required().force_new(),
            )
            .field(
                "customer_id",
                FieldSchema::string("Customer ID.").computed().optional(),
            )
            .field("name", FieldSchema::string("Name.").computed().optional())
            .field(
                "network",
                FieldSchema::string("Network address.").computed().optional(),
            )
            .field(
                "parent_mask_bits",
                FieldSchema::string("Parent netmask bits.")
                    .computed()
                    .optional(),
            )
            .field(
                "parent_subnet_id",
                FieldSchema::string("ID of the parent subnet.")
                    .computed()
                    .optional()
                    .force_new(),
            )
            .field(
                "parent_vlan_id",
                FieldSchema::string("Parent vlan ID.").computed().optional(),
            )
            .field(
                "parent_vlan_name",
                FieldSchema::string("Parent vlan name.").computed(),
            )
            .field(
                "parent_vlan_number",
                FieldSchema::string("Parent vlan number.").computed(),
            )
            .field(
                "subnet_id",
                FieldSchema::string("ID of the subnet.").computed().optional(),
            )
            .field(
                "tags",
                FieldSchema::string("Tags.")
                    .computed()
                    .optional()
                    .diff_suppress(fake_list_equal),
            )
            .field(
                "create_from_parent",
                FieldSchema::boolean("Use to create subnet from parent.")
                    .optional()
                    .default_bool(false)
                    .required_with(&["parent_subnet_id"]),
            )
            .field(
                "check_if_exists",
                FieldSchema::boolean("Use to check if subnet exists already.")
                    .optional()
                    .default_bool(false),
            )
    }

    fn write_params(state: &ResourceState, subnet_id: Option<String>) -> SubnetWrite {
        SubnetWrite {
            subnet_id,
            network: owned(state, "network"),
            mask_bits: owned(state, "mask_bits"),
            name: owned(state, "name"),
            customer_id: owned(state, "customer_id"),
            parent_subnet_id: owned(state, "parent_subnet_id"),
            parent_vlan_id: owned(state, "parent_vlan_id"),
            tags: owned(state, "tags"),
        }
    }

    /// Exact-match lookup by the filterable fields. Zero matches means
    /// the caller should create; exactly one is adoptable.
    async fn find_existing(&self, state: &ResourceState) -> Result<Option<String>> {
        let filter = SubnetFilter {
            mask_bits: owned(state, "mask_bits"),
            name: owned(state, "name"),
            network: owned(state, "network"),
            parent_subnet_id: owned(state, "parent_subnet_id"),
            tags: owned(state, "tags"),
        };

        let subnets = self.api.list_subnets(&filter).await?;
        match subnets.len() {
            0 => Ok(None),
            1 => match number_string(&subnets[0].subnet_id) {
                Some(id) => Ok(Some(id)),
                None => Err(ProviderError::Configuration {
                    message: "matched subnet carries no subnet_id".to_string(),
                }
                .into()),
            },
            _ => Err(ProviderError::AmbiguousMatch { resource: "subnet" }.into()),
        }
    }

    /// Adopt a remote subnet: backfill the immutable fields the remote
    /// decided, then push the rest of the declared state.
    async fn adopt(&self, state: &mut ResourceState, id: String) -> Result<()> {
        let record = self.api.get_subnet(numeric_id(&id, "subnet")?).await?;
        if let Some(mask_bits) = number_string(&record.mask_bits) {
            state.set_str("mask_bits", mask_bits);
        }
        if let Some(network) = record.network {
            state.set_str("network", network);
        }

        log::info!("Adopting existing subnet {}", id);
        state.set_id(id);
        self.update(state).await
    }

    async fn create_from_parent(&self, state: &mut ResourceState) -> Result<()> {
        let params = ChildSubnetCreate {
            parent_subnet_id: owned(state, "parent_subnet_id"),
            mask_bits: owned(state, "mask_bits"),
        };

        let ack = self.api.create_child_subnet(&params).await?;
        let id = ack.subnet_id.to_string();
        state.set_id(id.clone());

        // The remote picks the carved network; read it back before the
        // update so the declared state matches.
        let record = self.api.get_subnet(numeric_id(&id, "subnet")?).await?;
        if let Some(network) = record.network {
            state.set_str("network", network);
        }

        self.update(state).await
    }
}

pub(crate) fn map_subnet_record(state: &mut ResourceState, record: &SubnetRecord) {
    if let Some(customer_id) = number_string(&record.customer_id) {
        state.set_str("customer_id", customer_id);
    }
    if let Some(mask_bits) = number_string(&record.mask_bits) {
        state.set_str("mask_bits", mask_bits);
    }
    if let Some(name) = &record.name {
        state.set_str("name", name.clone());
    }
    if let Some(network) = &record.network {
        state.set_str("network", network.clone());
    }
    if let Some(parent_vlan_id) = number_string(&record.parent_vlan_id) {
        state.set_str("parent_vlan_id", parent_vlan_id);
    }
    if let Some(parent_vlan_name) = &record.parent_vlan_name {
        state.set_str("parent_vlan_name", parent_vlan_name.clone());
    }
    if let Some(parent_vlan_number) = number_string(&record.parent_vlan_number) {
        state.set_str("parent_vlan_number", parent_vlan_number);
    }
    if let Some(subnet_id) = number_string(&record.subnet_id) {
        state.set_str("subnet_id", subnet_id);
    }
    if let Some(tags) = &record.tags {
        state.set_str("tags", tags.join(","));
    }
}

#[async_trait]
impl ResourceLifecycle for SubnetResource {
    fn type_name(&self) -> &'static str {
        "ipam_subnet"
    }

    fn schema(&self) -> ResourceSchema {
        Self::schema()
    }

    async fn create(&self, state: &mut ResourceState) -> Result<()> {
        // An identifier in the declared state means adoption.
        if let Some(id) = owned(state, "subnet_id") {
            state.set_id(id);
            return self.update(state).await;
        }

        if state.get_bool("check_if_exists") {
            if let Some(id) = self.find_existing(state).await? {
                return self.adopt(state, id).await;
            }
        }

        if state.get_bool("create_from_parent") {
            return self.create_from_parent(state).await;
        }

        let params = Self::write_params(state, None);
        let ack = self.api.post_subnet(&params).await?;
        ack.ensure_ok()?;
        state.set_id(ack.record_id()?);

        self.read(state).await
    }

    async fn read(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "subnet")?;
        let record = self.api.get_subnet(numeric_id(&id, "subnet")?).await?;
        map_subnet_record(state, &record);
        Ok(())
    }

    async fn update(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "subnet")?;
        let params = Self::write_params(state, Some(id));
        let ack = self.api.post_subnet(&params).await?;
        ack.ensure_ok()?;
        state.set_id(ack.record_id()?);

        self.read(state).await
    }

    async fn delete(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "subnet")?;
        let ack = self.api.delete_subnet(numeric_id(&id, "subnet")?).await?;
        ack.ensure_deleted()?;
        state.clear_id();
        Ok(())
    }
}
