//! Configuration for immark-core
//!
//! The external store is a hosted GraphQL service addressed by a tenant
//! selector (subdomain) and a deployment region. Both are read from the
//! environment with placeholder defaults for local development.

use serde::{Deserialize, Serialize};

/// Placeholder tenant used when `IMMARK_STORE_SUBDOMAIN` is unset
pub const DEFAULT_SUBDOMAIN: &str = "your-subdomain";

/// Placeholder region used when `IMMARK_STORE_REGION` is unset
pub const DEFAULT_REGION: &str = "your-region";

/// Connection settings for the external GraphQL store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store tenant selector
    pub subdomain: String,
    /// Store deployment region
    pub region: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            subdomain: DEFAULT_SUBDOMAIN.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn new(subdomain: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            region: region.into(),
        }
    }

    /// Read configuration from `IMMARK_STORE_SUBDOMAIN` and
    /// `IMMARK_STORE_REGION`, falling back to placeholder defaults.
    pub fn from_env() -> Self {
        Self {
            subdomain: std::env::var("IMMARK_STORE_SUBDOMAIN")
                .unwrap_or_else(|_| DEFAULT_SUBDOMAIN.to_string()),
            region: std::env::var("IMMARK_STORE_REGION")
                .unwrap_or_else(|_| DEFAULT_REGION.to_string()),
        }
    }

    /// GraphQL endpoint derived from the subdomain and region
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}.graphql.{}.nhost.run/v1",
            self.subdomain, self.region
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.subdomain, "your-subdomain");
        assert_eq!(config.region, "your-region");
    }

    #[test]
    fn test_endpoint_derivation() {
        let config = StoreConfig::new("acme", "eu-central-1");
        assert_eq!(
            config.endpoint(),
            "https://acme.graphql.eu-central-1.nhost.run/v1"
        );
    }
}
