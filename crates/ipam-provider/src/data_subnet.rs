//! Subnet data source

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use ipam_client::IpamApi;
use ipam_core::{DataSource, FieldSchema, ProviderError, ResourceSchema};
use ipam_shared_types::ResourceState;

use crate::subnet::map_subnet_record;
use crate::util::{numeric_id, owned};

pub struct SubnetDataSource {
    api: Arc<dyn IpamApi>,
}

impl SubnetDataSource {
    pub fn new(api: Arc<dyn IpamApi>) -> Self {
        Self { api }
    }

    pub fn schema() -> ResourceSchema {
        ResourceSchema::new("ipam_subnet", "Read IPAM subnet.")
            .field("mask_bits", FieldSchema::string("Netmask bits.").computed())
            .field("customer_id", FieldSchema::string("Customer ID.").computed())
            .field("name", FieldSchema::string("Name.").computed())
            .field(
                "network",
                FieldSchema::string("Network address.").computed(),
            )
            .field(
                "parent_mask_bits",
                FieldSchema::string("Parent netmask bits.").computed(),
            )
            .field(
                "parent_subnet_id",
                FieldSchema::string("ID of the parent subnet.").computed(),
            )
            .field(
                "parent_vlan_id",
                FieldSchema::string("Parent vlan ID.").computed(),
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
                FieldSchema::string("ID of the subnet.").required(),
            )
            .field("tags", FieldSchema::string("Tags.").computed())
    }
}

#[async_trait]
impl DataSource for SubnetDataSource {
    fn type_name(&self) -> &'static str {
        "ipam_subnet"
    }

    fn schema(&self) -> ResourceSchema {
        Self::schema()
    }

    async fn read(&self, state: &mut ResourceState) -> Result<()> {
        let id = owned(state, "subnet_id").ok_or_else(|| ProviderError::Configuration {
            message: "subnet_id is required".to_string(),
        })?;

        let record = self.api.get_subnet(numeric_id(&id, "subnet")?).await?;
        map_subnet_record(state, &record);
        state.set_id(id);
        Ok(())
    }
}
