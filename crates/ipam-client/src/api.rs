//! Remote API surface
//!
//! One method per remote endpoint. Reconcilers hold this trait object so
//! tests can substitute a scripted implementation for the HTTP client.

use anyhow::Result;
use async_trait::async_trait;

use crate::envelope::{ChildSubnetAck, DeleteAck, SuggestedIp, WriteAck};
use crate::params::{
    ChildSubnetCreate, IpFilter, IpWrite, SubnetFilter, SubnetWrite, SuggestIpQuery, VlanFilter,
    VlanWrite,
};
use crate::records::{IpRecord, SubnetRecord, VlanRecord};

#[async_trait]
pub trait IpamApi: Send + Sync {
    async fn list_subnets(&self, filter: &SubnetFilter) -> Result<Vec<SubnetRecord>>;

    async fn get_subnet(&self, id: i64) -> Result<SubnetRecord>;

    async fn post_subnet(&self, params: &SubnetWrite) -> Result<WriteAck>;

    async fn create_child_subnet(&self, params: &ChildSubnetCreate) -> Result<ChildSubnetAck>;

    async fn delete_subnet(&self, id: i64) -> Result<DeleteAck>;

    async fn suggest_ip(&self, query: &SuggestIpQuery) -> Result<SuggestedIp>;

    async fn list_ips(&self, filter: &IpFilter) -> Result<Vec<IpRecord>>;

    async fn post_ip(&self, params: &IpWrite) -> Result<WriteAck>;

    async fn delete_ip(&self, id: i64) -> Result<DeleteAck>;

    async fn list_vlans(&self, filter: &VlanFilter) -> Result<Vec<VlanRecord>>;

    async fn get_vlan(&self, id: i64) -> Result<VlanRecord>;

    async fn post_vlan(&self, params: &VlanWrite) -> Result<WriteAck>;

    async fn put_vlan(&self, id: i64, params: &VlanWrite) -> Result<WriteAck>;

    async fn delete_vlan(&self, id: i64) -> Result<DeleteAck>;
}
