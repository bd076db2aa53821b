//! IPAM provider core
//!
//! Schema declarations, resource lifecycle abstractions and the small
//! allocation/diff primitives shared by every resource kind.

pub mod error;
pub mod fake_list;
pub mod lifecycle;
pub mod registry;
pub mod schema;
pub mod vlan_range;

pub use error::ProviderError;
pub use fake_list::fake_list_equal;
pub use lifecycle::{DataSource, ResourceLifecycle};
pub use registry::ResourceRegistry;
pub use schema::{FieldSchema, FieldType, ResourceSchema};
pub use vlan_range::{allocate_from_range, is_vlan_range, vlan_range_expression};
