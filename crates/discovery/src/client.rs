//! HTTP client of the discovery service.

use std::time::Duration;

use async_trait::async_trait;
use topology_core::{ConfigurationError, Result, TopologyConfiguration, TopologyDescriptor};
use tracing::{debug, info, instrument, warn};

/// Header carrying the caller's client name.
pub const CLIENT_NAME_HEADER: &str = "X-Client-Name";

/// Source of topology descriptors served over the network.
#[async_trait]
pub trait DiscoveryClient: Send + Sync {
    /// Name this client identifies itself with.
    fn client_name(&self) -> &str;

    /// Fetches the descriptor of `cluster_type`.
    async fn fetch_topology(&self, cluster_type: &str) -> Result<TopologyDescriptor>;
}

/// Fetches and resolves the topology of `cluster_type`.
pub async fn resolve_topology(
    client: &dyn DiscoveryClient,
    cluster_type: &str,
) -> Result<TopologyConfiguration> {
    let descriptor = client.fetch_topology(cluster_type).await?;
    TopologyConfiguration::from_descriptor(cluster_type, descriptor)
}

/// Discovery client speaking HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpDiscoveryClient {
    /// Discovery service URL (e.g., "http://host2:2222")
    base_url: String,
    client_name: String,
    service_name: String,
    http_client: reqwest::Client,
}

impl HttpDiscoveryClient {
    pub fn new(
        base_url: impl Into<String>,
        client_name: impl Into<String>,
        service_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ConfigurationError::discovery(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_name: client_name.into(),
            service_name: service_name.into(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// URL of the service's API description.
    pub fn spec_url(&self) -> String {
        format!("{}/swagger.json", self.base_url)
    }

    fn topology_url(&self, cluster_type: &str) -> String {
        format!("{}/v1/clusters/{}/topology", self.base_url, cluster_type)
    }
}

#[async_trait]
impl DiscoveryClient for HttpDiscoveryClient {
    fn client_name(&self) -> &str {
        &self.client_name
    }

    #[instrument(skip(self), fields(client = %self.client_name, service = %self.service_name))]
    async fn fetch_topology(&self, cluster_type: &str) -> Result<TopologyDescriptor> {
        let url = self.topology_url(cluster_type);

        debug!(url = %url, "Calling discovery service");

        let response = self
            .http_client
            .get(&url)
            .header(CLIENT_NAME_HEADER, &self.client_name)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Discovery request failed");
                ConfigurationError::discovery(format!("Discovery service unavailable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Discovery service returned error");
            return Err(ConfigurationError::discovery(format!(
                "Discovery service returned {}: {}",
                status, body
            )));
        }

        let descriptor: TopologyDescriptor = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse discovery response");
            ConfigurationError::parse(url.clone(), e)
        })?;

        info!(
            clusters = descriptor.clusters.len(),
            "Fetched topology from discovery service"
        );

        Ok(descriptor)
    }
}
