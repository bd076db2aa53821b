//! Resource lifecycle abstractions

use anyhow::Result;
use async_trait::async_trait;

use ipam_shared_types::ResourceState;

use crate::schema::ResourceSchema;

/// Lifecycle of one managed resource kind.
///
/// The host framework owns the state object and calls exactly one
/// lifecycle function per operation. Create and update are expected to
/// leave the state refreshed from the remote system; delete clears the id
/// once the remote acknowledges removal.
#[async_trait]
pub trait ResourceLifecycle: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> ResourceSchema;

    async fn create(&self, state: &mut ResourceState) -> Result<()>;

    async fn read(&self, state: &mut ResourceState) -> Result<()>;

    async fn update(&self, state: &mut ResourceState) -> Result<()>;

    async fn delete(&self, state: &mut ResourceState) -> Result<()>;
}

/// Read-only lookup exposed to the host alongside the managed resources.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> ResourceSchema;

    async fn read(&self, state: &mut ResourceState) -> Result<()>;
}
