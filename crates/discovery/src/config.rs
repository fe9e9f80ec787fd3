//! Discovery configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where to find the discovery service and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Service registry file mapping `<service>.<namespace>` to host and port
    #[serde(default = "default_services_file")]
    pub services_file: PathBuf,
    /// Registered name of the discovery service
    #[serde(default = "default_service_name")]
    pub service_name: String,
    /// Registry namespace of the discovery service
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_services_file() -> PathBuf {
    PathBuf::from("/nail/etc/services/services.yaml")
}

fn default_service_name() -> String {
    crate::factory::KAFKA_DISCOVERY_SERVICE.to_string()
}

fn default_namespace() -> String {
    "main".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            services_file: default_services_file(),
            service_name: default_service_name(),
            namespace: default_namespace(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DiscoveryConfig {
    pub fn with_services_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.services_file = path.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Registry key of the discovery service.
    pub fn registry_key(&self) -> String {
        format!("{}.{}", self.service_name, self.namespace)
    }
}
