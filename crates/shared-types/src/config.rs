use std::env;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Environment fallback for [`ProviderConfig::host`].
pub const ENV_HOST: &str = "IPAM_API_HOST";
/// Environment fallback for [`ProviderConfig::username`].
pub const ENV_USERNAME: &str = "IPAM_API_USERNAME";
/// Environment fallback for [`ProviderConfig::password`].
pub const ENV_PASSWORD: &str = "IPAM_API_PASSWORD";
/// Environment fallback for [`ProviderConfig::insecure`].
pub const ENV_INSECURE: &str = "IPAM_API_INSECURE";

/// Connection settings for the remote IPAM system.
///
/// Each credential field may be given explicitly or resolved from the
/// environment via [`ProviderConfig::with_env_fallback`]; explicit values
/// always win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub host: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub insecure: bool,
}

impl ProviderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration purely from the environment.
    pub fn from_env() -> Self {
        Self::new().with_env_fallback()
    }

    /// Fill unset fields from the environment.
    pub fn with_env_fallback(mut self) -> Self {
        if self.host.is_none() {
            self.host = env::var(ENV_HOST).ok();
        }
        if self.username.is_none() {
            self.username = env::var(ENV_USERNAME).ok();
        }
        if self.password.is_none() {
            self.password = env::var(ENV_PASSWORD).ok();
        }
        if !self.insecure {
            self.insecure = env::var(ENV_INSECURE)
                .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
                .unwrap_or(false);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.as_deref().unwrap_or("").is_empty() {
            bail!("IPAM host is required");
        }
        if self.username.as_deref().unwrap_or("").is_empty() {
            bail!("IPAM username is required");
        }
        if self.password.as_deref().unwrap_or("").is_empty() {
            bail!("IPAM password is required");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_credentials() {
        let mut config = ProviderConfig::new();
        assert!(config.validate().is_err());

        config.host = Some("ipam.example.com".to_string());
        assert!(config.validate().is_err());

        config.username = Some("admin".to_string());
        config.password = Some("secret".to_string());
        assert!(config.validate().is_ok());
    }

    // Environment fallback is covered in a single test so parallel tests
    // never race on the process environment.
    #[test]
    fn test_env_fallback_resolution() {
        env::set_var(ENV_HOST, "env.example.com");
        env::set_var(ENV_USERNAME, "env-user");
        env::set_var(ENV_PASSWORD, "env-pass");
        env::set_var(ENV_INSECURE, "true");

        let config = ProviderConfig::from_env();
        assert_eq!(config.host.as_deref(), Some("env.example.com"));
        assert_eq!(config.username.as_deref(), Some("env-user"));
        assert_eq!(config.password.as_deref(), Some("env-pass"));
        assert!(config.insecure);

        // Explicit values win over the environment.
        let explicit = ProviderConfig {
            host: Some("explicit.example.com".to_string()),
            ..ProviderConfig::new()
        }
        .with_env_fallback();
        assert_eq!(explicit.host.as_deref(), Some("explicit.example.com"));
        assert_eq!(explicit.username.as_deref(), Some("env-user"));

        env::remove_var(ENV_HOST);
        env::remove_var(ENV_USERNAME);
        env::remove_var(ENV_PASSWORD);
        env::remove_var(ENV_INSECURE);
    }
}
