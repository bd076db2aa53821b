//! IPAM remote client
//!
//! Typed access to the remote asset-management REST API. The [`IpamApi`]
//! trait is the seam the reconcilers program against; [`HttpIpamClient`]
//! is the reqwest-backed implementation.

pub mod api;
pub mod client;
pub mod envelope;
pub mod params;
pub mod records;

pub use api::IpamApi;
pub use client::HttpIpamClient;
pub use envelope::{ChildSubnetAck, DeleteAck, SuggestedIp, WriteAck};
pub use params::{
    ChildSubnetCreate, IpFilter, IpWrite, SubnetFilter, SubnetWrite, SuggestIpQuery, VlanFilter,
    VlanWrite,
};
pub use records::{IpRecord, SubnetRecord, VlanRecord};
