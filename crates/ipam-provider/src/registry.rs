//! Registry composition
//!
//! Builds the startup registration table: every managed resource kind and
//! data source against one shared API client.

use std::sync::Arc;

use anyhow::Result;

use ipam_client::{HttpIpamClient, IpamApi};
use ipam_core::ResourceRegistry;
use ipam_shared_types::ProviderConfig;

use crate::data_subnet::SubnetDataSource;
use crate::ip::IpResource;
use crate::subnet::SubnetResource;
use crate::vlan::VlanResource;

pub fn build_registry(api: Arc<dyn IpamApi>) -> ResourceRegistry {
    let mut registry = ResourceRegistry::new();
    registry.register_resource(Arc::new(SubnetResource::new(api.clone())));
    registry.register_resource(Arc::new(IpResource::new(api.clone())));
    registry.register_resource(Arc::new(VlanResource::new(api.clone())));
    registry.register_data_source(Arc::new(SubnetDataSource::new(api)));
    registry
}

/// Resolve configuration, connect the HTTP client and build the registry.
pub fn connect(config: &ProviderConfig) -> Result<ResourceRegistry> {
    let client = HttpIpamClient::new(config)?;
    Ok(build_registry(Arc::new(client)))
}
