//! Construction of the discovery client.

use std::time::Duration;

use topology_core::Result;
use tracing::{debug, info};

use crate::client::HttpDiscoveryClient;
use crate::config::DiscoveryConfig;
use crate::registry::resolve_service;

/// Registered name of the Kafka discovery service.
pub const KAFKA_DISCOVERY_SERVICE: &str = "kafka_discovery";

/// Builds a discovery client identifying itself as `client_id`.
///
/// Returns `Ok(None)` when discovery is not configured, which is a valid
/// setup for deployments that only read descriptor files.
pub fn get_kafka_discovery_client(
    client_id: &str,
    config: Option<&DiscoveryConfig>,
) -> Result<Option<HttpDiscoveryClient>> {
    let Some(config) = config else {
        debug!(client_id, "Discovery not configured");
        return Ok(None);
    };

    let endpoint = resolve_service(&config.services_file, &config.registry_key())?;
    let client = HttpDiscoveryClient::new(
        endpoint.base_url(),
        client_id,
        &config.service_name,
        Duration::from_secs(config.timeout_secs),
    )?;

    info!(
        client_id,
        service = %config.service_name,
        url = %client.base_url(),
        "Created Kafka discovery client"
    );

    Ok(Some(client))
}
