//! Service registry lookup.
//!
//! The registry is a YAML file of `<service>.<namespace>` entries:
//!
//! ```yaml
//! kafka_discovery.main:
//!   host: host2
//!   port: 2222
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use topology_core::{ConfigurationError, Result};
use tracing::debug;

/// Host and port a service is reachable at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    /// Base HTTP URL of the endpoint.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Looks up `key` in the registry file at `path`.
pub fn resolve_service(path: impl AsRef<Path>, key: &str) -> Result<ServiceEndpoint> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        ConfigurationError::discovery(format!(
            "Failed to read service registry {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut services: BTreeMap<String, ServiceEndpoint> = serde_yaml::from_str(&contents)
        .map_err(|e| ConfigurationError::parse(path.display().to_string(), e))?;

    let endpoint = services.remove(key).ok_or_else(|| {
        ConfigurationError::discovery(format!(
            "Service {} is not registered in {}",
            key,
            path.display()
        ))
    })?;

    debug!(service = key, host = %endpoint.host, port = endpoint.port, "Resolved service");

    Ok(endpoint)
}
