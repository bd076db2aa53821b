//! HTTP client for the remote IPAM API

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use ipam_core::ProviderError;
use ipam_shared_types::ProviderConfig;

use crate::api::IpamApi;
use crate::envelope::{ChildSubnetAck, DeleteAck, SuggestedIp, WriteAck};
use crate::params::{
    ChildSubnetCreate, IpFilter, IpWrite, SubnetFilter, SubnetWrite, SuggestIpQuery, VlanFilter,
    VlanWrite,
};
use crate::records::{IpList, IpRecord, SubnetList, SubnetRecord, VlanList, VlanRecord};

/// reqwest-backed [`IpamApi`] implementation.
///
/// Basic auth on every request, one 30 second timeout, no retries; a
/// non-2xx answer is surfaced with status and body and reconciliation is
/// abandoned.
pub struct HttpIpamClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl HttpIpamClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let host = config.host.as_deref().unwrap_or("");
        let base_url = if host.contains("://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", host.trim_end_matches('/'))
        };

        let mut builder = Client::builder().timeout(std::time::Duration::from_secs(30));
        if config.insecure {
            log::warn!("TLS certificate verification disabled for {}", base_url);
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().map_err(ProviderError::from)?;

        Ok(Self {
            client,
            base_url,
            username: config.username.clone().unwrap_or_default(),
            password: config.password.clone().unwrap_or_default(),
        })
    }

    async fn api_get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.get(&url).query(query)).await
    }

    async fn api_form<T, F>(&self, method: Method, path: &str, form: &F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Serialize,
    {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.request(method, &url).form(form))
            .await
    }

    async fn api_fetch<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.get(&url)).await
    }

    async fn api_delete<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        self.execute(self.client.delete(&url)).await
    }

    async fn execute<T>(&self, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(ProviderError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Http { status, body }.into());
        }

        Ok(response.json().await.map_err(ProviderError::from)?)
    }
}

#[async_trait]
impl IpamApi for HttpIpamClient {
    async fn list_subnets(&self, filter: &SubnetFilter) -> Result<Vec<SubnetRecord>> {
        let list: SubnetList = self.api_get("/api/1.0/subnets/", filter).await?;
        Ok(list.subnets)
    }

    async fn get_subnet(&self, id: i64) -> Result<SubnetRecord> {
        self.api_fetch(&format!("/api/1.0/subnets/{}/", id)).await
    }

    async fn post_subnet(&self, params: &SubnetWrite) -> Result<WriteAck> {
        self.api_form(Method::POST, "/api/1.0/subnets/", params)
            .await
    }

    async fn create_child_subnet(&self, params: &ChildSubnetCreate) -> Result<ChildSubnetAck> {
        self.api_form(Method::POST, "/api/1.0/subnets/create_child/", params)
            .await
    }

    async fn delete_subnet(&self, id: i64) -> Result<DeleteAck> {
        self.api_delete(&format!("/api/1.0/subnets/{}/", id)).await
    }

    async fn suggest_ip(&self, query: &SuggestIpQuery) -> Result<SuggestedIp> {
        self.api_get("/api/1.0/suggest_ip/", query).await
    }

    async fn list_ips(&self, filter: &IpFilter) -> Result<Vec<IpRecord>> {
        let list: IpList = self.api_get("/api/1.0/ips/", filter).await?;
        Ok(list.ips)
    }

    async fn post_ip(&self, params: &IpWrite) -> Result<WriteAck> {
        self.api_form(Method::POST, "/api/1.0/ips/", params).await
    }

    async fn delete_ip(&self, id: i64) -> Result<DeleteAck> {
        self.api_delete(&format!("/api/1.0/ips/{}/", id)).await
    }

    async fn list_vlans(&self, filter: &VlanFilter) -> Result<Vec<VlanRecord>> {
        let list: VlanList = self.api_get("/api/1.0/vlans/", filter).await?;
        Ok(list.vlans)
    }

    async fn get_vlan(&self, id: i64) -> Result<VlanRecord> {
        self.api_fetch(&format!("/api/1.0/vlans/{}/", id)).await
    }

    async fn post_vlan(&self, params: &VlanWrite) -> Result<WriteAck> {
        self.api_form(Method::POST, "/api/1.0/vlans/", params).await
    }

    async fn put_vlan(&self, id: i64, params: &VlanWrite) -> Result<WriteAck> {
        self.api_form(Method::PUT, &format!("/api/1.0/vlans/{}/", id), params)
            .await
    }

    async fn delete_vlan(&self, id: i64) -> Result<DeleteAck> {
        self.api_delete(&format!("/api/1.0/vlans/{}/", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            host: Some("ipam.example.com".to_string()),
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            insecure: false,
        }
    }

    #[test]
    fn test_base_url_normalization() {
        let client = HttpIpamClient::new(&test_config()).unwrap();
        assert_eq!(client.base_url, "https://ipam.example.com");

        let mut config = test_config();
        config.host = Some("http://ipam.example.com/".to_string());
        let client = HttpIpamClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://ipam.example.com");
    }

    #[test]
    fn test_rejects_incomplete_config() {
        let mut config = test_config();
        config.password = None;
        assert!(HttpIpamClient::new(&config).is_err());
    }
}
