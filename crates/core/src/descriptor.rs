//! Topology descriptor documents and the loader that reads them.
//!
//! A descriptor looks like:
//!
//! ```yaml
//! clusters:
//!   cluster1:
//!     broker_list:
//!       - "mybrokerhost1:9092"
//!     zookeeper: "0.1.2.3,0.2.3.4/kafka"
//! local_config:
//!   cluster: cluster1
//!   prefix: my.prefix.
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cluster::BrokerList;
use crate::error::{ConfigurationError, Result};

/// Raw topology descriptor for one cluster type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyDescriptor {
    /// Cluster name to endpoint entry
    #[serde(default)]
    pub clusters: BTreeMap<String, ClusterEntry>,
    /// Selection of the cluster local to this deployment
    #[serde(default)]
    pub local_config: Option<LocalConfig>,
}

/// Endpoint entry of a single cluster in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterEntry {
    pub broker_list: BrokerList,
    pub zookeeper: String,
}

/// The `local_config` section of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalConfig {
    /// Name of the local cluster
    pub cluster: String,
    /// Logging (scribe) prefix for this deployment
    #[serde(default)]
    pub prefix: Option<String>,
}

impl TopologyDescriptor {
    /// Parses a descriptor from YAML text.
    ///
    /// `source_name` only appears in error messages.
    pub fn from_yaml_str(yaml: &str, source_name: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigurationError::parse(source_name, e))
    }
}

/// Source of topology descriptors.
pub trait DescriptorLoader: Send + Sync {
    /// Loads the descriptor stored at `path`.
    ///
    /// Fails with [`ConfigurationError`] when the path does not exist or the
    /// content is malformed.
    fn load(&self, path: &Path) -> Result<TopologyDescriptor>;
}

/// Loads descriptors from YAML files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFileLoader;

impl DescriptorLoader for YamlFileLoader {
    fn load(&self, path: &Path) -> Result<TopologyDescriptor> {
        load_yaml_config(path)
    }
}

/// Reads and parses the YAML descriptor at `path`.
pub fn load_yaml_config(path: impl AsRef<Path>) -> Result<TopologyDescriptor> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigurationError::missing_descriptor(path));
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigurationError::io(path, e))?;
    let descriptor = TopologyDescriptor::from_yaml_str(&contents, &path.display().to_string())?;

    debug!(
        path = %path.display(),
        clusters = descriptor.clusters.len(),
        "Loaded topology descriptor"
    );

    Ok(descriptor)
}
