//! IP address resource

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use ipam_client::{IpFilter, IpWrite, IpamApi, SuggestIpQuery};
use ipam_core::{FieldSchema, ProviderError, ResourceLifecycle, ResourceSchema};
use ipam_shared_types::ResourceState;

use crate::util::{numeric_id, owned, require_id};

pub struct IpResource {
    api: Arc<dyn IpamApi>,
}

impl IpResource {
    pub fn new(api: Arc<dyn IpamApi>) -> Self {
        Self { api }
    }

    pub fn schema() -> ResourceSchema {
        ResourceSchema::new("ipam_ip", "Manage IPAM ips.")
            .field("id", FieldSchema::string("IP address ID.").computed())
            .field(
                "ipaddress",
                FieldSchema::string("IP address.")
                    .computed()
                    .optional()
                    .force_new(),
            )
            .field("notes", FieldSchema::string("Notes.").computed().optional())
            .field(
                "subnet_id",
                FieldSchema::string("Subnet ID.").required().force_new(),
            )
            .field(
                "suggest_ip",
                FieldSchema::boolean("Get next free IP in subnet.")
                    .optional()
                    .default_bool(false)
                    .conflicts_with(&["ipaddress"]),
            )
    }

    async fn next_free_address(&self, state: &ResourceState) -> Result<String> {
        let query = SuggestIpQuery {
            subnet_id: owned(state, "subnet_id"),
        };
        let suggested = self.api.suggest_ip(&query).await?;
        log::info!(
            "Remote suggested address {} in subnet {}",
            suggested.ip,
            query.subnet_id.as_deref().unwrap_or("?")
        );
        Ok(suggested.ip)
    }
}

#[async_trait]
impl ResourceLifecycle for IpResource {
    fn type_name(&self) -> &'static str {
        "ipam_ip"
    }

    fn schema(&self) -> ResourceSchema {
        Self::schema()
    }

    async fn create(&self, state: &mut ResourceState) -> Result<()> {
        let mut ipaddress = owned(state, "ipaddress");
        if state.get_bool("suggest_ip") {
            ipaddress = Some(self.next_free_address(state).await?);
        }

        let params = IpWrite {
            ip_id: None,
            ipaddress,
            notes: owned(state, "notes"),
            subnet_id: owned(state, "subnet_id"),
        };

        let ack = self.api.post_ip(&params).await?;
        ack.ensure_ok()?;
        state.set_id(ack.record_id()?);

        self.read(state).await
    }

    async fn read(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "IP")?;
        let filter = IpFilter {
            ip_id: Some(id.clone()),
        };

        let ips = self.api.list_ips(&filter).await?;
        // IP ids are expected unique; anything but one match is fatal.
        let record = match ips.len() {
            0 => return Err(ProviderError::NotFound { resource: "IP", id }.into()),
            1 => &ips[0],
            _ => return Err(ProviderError::AmbiguousMatch { resource: "IP" }.into()),
        };

        if let Some(ip) = &record.ip {
            state.set_str("ipaddress", ip.clone());
        }
        if let Some(notes) = &record.notes {
            state.set_str("notes", notes.clone());
        }
        Ok(())
    }

    async fn update(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "IP")?;
        let params = IpWrite {
            ip_id: Some(id),
            notes: owned(state, "notes"),
            ..IpWrite::default()
        };

        let ack = self.api.post_ip(&params).await?;
        ack.ensure_ok()?;
        state.set_id(ack.record_id()?);

        self.read(state).await
    }

    async fn delete(&self, state: &mut ResourceState) -> Result<()> {
        let id = require_id(state, "IP")?;
        let ack = self.api.delete_ip(numeric_id(&id, "IP")?).await?;
        ack.ensure_deleted()?;
        state.clear_id();
        Ok(())
    }
}
