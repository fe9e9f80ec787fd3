//! Topology resolution: named clusters of one cluster type plus the local
//! cluster selection.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cluster::ClusterConfig;
use crate::descriptor::{DescriptorLoader, TopologyDescriptor, YamlFileLoader};
use crate::error::{ConfigurationError, Result};

/// Directory holding `<cluster_type>.yaml` descriptors when none is given.
pub const DEFAULT_TOPOLOGY_BASE_PATH: &str = "/nail/etc/kafka_discovery";

/// Descriptor path for a cluster type under `base_path`.
pub fn descriptor_path(base_path: impl AsRef<Path>, cluster_type: &str) -> PathBuf {
    base_path.as_ref().join(format!("{}.yaml", cluster_type))
}

/// Resolved topology of one cluster type.
///
/// Equality only looks at the cluster type and the resolved clusters, never
/// at where the descriptor came from.
#[derive(Debug, Clone)]
pub struct TopologyConfiguration {
    cluster_type: String,
    source: String,
    clusters: BTreeMap<String, ClusterConfig>,
    local_cluster_name: Option<String>,
    logging_prefix: Option<String>,
}

impl TopologyConfiguration {
    /// Loads the topology from [`DEFAULT_TOPOLOGY_BASE_PATH`].
    pub fn new(cluster_type: impl Into<String>) -> Result<Self> {
        Self::with_base_path(cluster_type, DEFAULT_TOPOLOGY_BASE_PATH)
    }

    /// Loads the topology from `<base_path>/<cluster_type>.yaml`.
    pub fn with_base_path(
        cluster_type: impl Into<String>,
        base_path: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::with_loader(cluster_type, base_path, &YamlFileLoader)
    }

    /// Loads the topology through a custom descriptor loader.
    pub fn with_loader(
        cluster_type: impl Into<String>,
        base_path: impl AsRef<Path>,
        loader: &dyn DescriptorLoader,
    ) -> Result<Self> {
        let cluster_type = cluster_type.into();
        let path = descriptor_path(base_path, &cluster_type);

        let descriptor = loader.load(&path)?;
        Self::build(cluster_type, path.display().to_string(), descriptor)
    }

    /// Builds the topology from a descriptor obtained elsewhere, e.g. from
    /// the discovery service.
    pub fn from_descriptor(
        cluster_type: impl Into<String>,
        descriptor: TopologyDescriptor,
    ) -> Result<Self> {
        Self::build(cluster_type.into(), "<descriptor>".to_string(), descriptor)
    }

    fn build(cluster_type: String, source: String, descriptor: TopologyDescriptor) -> Result<Self> {
        let clusters: BTreeMap<_, _> = descriptor
            .clusters
            .into_iter()
            .map(|(name, entry)| {
                let cluster =
                    ClusterConfig::new(&cluster_type, &name, entry.broker_list, entry.zookeeper);
                (name, cluster)
            })
            .collect();

        let (local_cluster_name, logging_prefix) = match descriptor.local_config {
            Some(local) => (Some(local.cluster), local.prefix),
            None => (None, None),
        };

        if let Some(name) = &local_cluster_name {
            if !clusters.contains_key(name) {
                // Only local-cluster queries fail; the rest of the topology stays usable.
                warn!(
                    cluster_type = %cluster_type,
                    local_cluster = %name,
                    "Local cluster is not defined in topology"
                );
            }
        }

        info!(
            cluster_type = %cluster_type,
            source = %source,
            clusters = clusters.len(),
            local_cluster = local_cluster_name.as_deref().unwrap_or("none"),
            "Loaded Kafka topology"
        );

        Ok(Self {
            cluster_type,
            source,
            clusters,
            local_cluster_name,
            logging_prefix,
        })
    }

    pub fn cluster_type(&self) -> &str {
        &self.cluster_type
    }

    /// Where the descriptor was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn local_cluster_name(&self) -> Option<&str> {
        self.local_cluster_name.as_deref()
    }

    /// Returns the cluster local to this deployment.
    pub fn local_cluster(&self) -> Result<ClusterConfig> {
        let name = self
            .local_cluster_name
            .as_deref()
            .ok_or_else(|| ConfigurationError::no_local_cluster(&self.cluster_type))?;

        self.clusters.get(name).cloned().ok_or_else(|| {
            ConfigurationError::unknown_local_cluster(&self.cluster_type, name)
        })
    }

    /// Returns the cluster called `name`.
    pub fn cluster_by_name(&self, name: &str) -> Result<ClusterConfig> {
        debug!(cluster_type = %self.cluster_type, cluster = name, "Looking up cluster");

        self.clusters
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigurationError::unknown_cluster(&self.cluster_type, name))
    }

    /// Returns every cluster of this topology.
    pub fn all_clusters(&self) -> Vec<ClusterConfig> {
        self.clusters.values().cloned().collect()
    }

    /// Logging prefix of the local deployment, if any.
    pub fn scribe_local_prefix(&self) -> Option<&str> {
        self.logging_prefix.as_deref()
    }
}

impl PartialEq for TopologyConfiguration {
    fn eq(&self, other: &Self) -> bool {
        self.cluster_type == other.cluster_type && self.clusters == other.clusters
    }
}

impl Eq for TopologyConfiguration {}
