//! IPAM provider resources
//!
//! One reconciler per managed resource kind plus the subnet data source,
//! composed into a [`ResourceRegistry`](ipam_core::ResourceRegistry) at
//! startup.

pub mod data_subnet;
pub mod ip;
pub mod registry;
pub mod subnet;
pub mod vlan;

mod util;


pub use data_subnet::SubnetDataSource;
pub use ip::IpResource;
pub use registry::{build_registry, connect};
pub use subnet::SubnetResource;
pub use vlan::VlanResource;
