//! Resource registry
//!
//! Explicit registration table mapping resource-type names to lifecycle
//! implementations, built once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;

use crate::error::ProviderError;
use crate::lifecycle::{DataSource, ResourceLifecycle};

#[derive(Default)]
pub struct ResourceRegistry {
    resources: HashMap<String, Arc<dyn ResourceLifecycle>>,
    data_sources: HashMap<String, Arc<dyn DataSource>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_resource(&mut self, resource: Arc<dyn ResourceLifecycle>) {
        let name = resource.type_name();
        log::info!("Registering resource type: {}", name);
        self.resources.insert(name.to_string(), resource);
    }

    pub fn register_data_source(&mut self, data_source: Arc<dyn DataSource>) {
        let name = data_source.type_name();
        log::info!("Registering data source type: {}", name);
        self.data_sources.insert(name.to_string(), data_source);
    }

    pub fn resource(&self, name: &str) -> Result<Arc<dyn ResourceLifecycle>> {
        self.resources.get(name).cloned().ok_or_else(|| {
            ProviderError::Configuration {
                message: format!("resource type '{}' not registered", name),
            }
            .into()
        })
    }

    pub fn data_source(&self, name: &str) -> Result<Arc<dyn DataSource>> {
        self.data_sources.get(name).cloned().ok_or_else(|| {
            ProviderError::Configuration {
                message: format!("data source type '{}' not registered", name),
            }
            .into()
        })
    }

    pub fn list_resources(&self) -> Vec<String> {
        let mut names: Vec<String> = self.resources.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn list_data_sources(&self) -> Vec<String> {
        let mut names: Vec<String> = self.data_sources.keys().cloned().collect();
        names.sort();
        names
    }
}
