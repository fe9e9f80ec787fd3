//! Test fixtures: descriptor documents and temporary topology directories.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Descriptor with two clusters, `cluster1` local, and a scribe prefix.
pub const MOCK_TOPOLOGY_CONFIG: &str = r#"
---
  clusters:
    cluster1:
      broker_list:
        - "mybrokerhost1:9092"
      zookeeper: "0.1.2.3,0.2.3.4/kafka"
    cluster2:
      broker_list:
        - "mybrokerhost2:9092"
      zookeeper: "0.3.4.5,0.4.5.6/kafka"
  local_config:
    cluster: cluster1
    prefix: my.prefix.
"#;

/// Same clusters, no scribe prefix, brokers written as joined strings.
pub const MOCK_NO_SCRIBE_CONFIG: &str = r#"
clusters:
  cluster1:
    broker_list: "mybrokerhost1:9092"
    zookeeper: "0.2.3.4/kafka,0.1.2.3"
  cluster2:
    broker_list: "mybrokerhost2:9092"
    zookeeper: "0.3.4.5,0.4.5.6/kafka"
local_config:
  cluster: cluster1
"#;

/// Local cluster names a cluster that does not exist.
pub const MOCK_MISSING_LOCAL_CONFIG: &str = r#"
clusters:
  cluster1:
    broker_list: ["mybroker"]
    zookeeper: "0.1.2.3,0.2.3.4/kafka"
local_config:
  cluster: cluster3
"#;

/// The scenario descriptor as the discovery service serves it.
pub fn mock_topology_json() -> serde_json::Value {
    serde_json::json!({
        "clusters": {
            "cluster1": {
                "broker_list": ["mybrokerhost1:9092"],
                "zookeeper": "0.1.2.3,0.2.3.4/kafka"
            },
            "cluster2": {
                "broker_list": ["mybrokerhost2:9092"],
                "zookeeper": "0.3.4.5,0.4.5.6/kafka"
            }
        },
        "local_config": {
            "cluster": "cluster1",
            "prefix": "my.prefix."
        }
    })
}

/// Uniquely named directory under the system temp dir, removed on drop.
pub struct TopologyDir {
    path: PathBuf,
}

impl TopologyDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("kafka-topology-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path).expect("Failed to create topology dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `<cluster_type>.yaml` into the directory.
    pub fn with_descriptor(self, cluster_type: &str, yaml: &str) -> Self {
        self.write(&format!("{}.yaml", cluster_type), yaml);
        self
    }

    /// Writes an arbitrary file and returns its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }
}

impl Default for TopologyDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TopologyDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
