//! Cluster endpoint value object.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Broker addresses as supplied by a descriptor or a caller.
///
/// Descriptors carry either a YAML sequence or a single comma-joined string;
/// both resolve to the same ordered list of `host:port` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrokerList {
    Hosts(Vec<String>),
    Joined(String),
}

impl BrokerList {
    /// Returns the brokers as an ordered list of entries.
    pub fn into_hosts(self) -> Vec<String> {
        match self {
            Self::Hosts(hosts) => hosts
                .into_iter()
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .collect(),
            Self::Joined(joined) => split_entries(&joined).map(str::to_string).collect(),
        }
    }
}

impl From<&str> for BrokerList {
    fn from(joined: &str) -> Self {
        Self::Joined(joined.to_string())
    }
}

impl From<String> for BrokerList {
    fn from(joined: String) -> Self {
        Self::Joined(joined)
    }
}

impl<S: Into<String>> From<Vec<S>> for BrokerList {
    fn from(hosts: Vec<S>) -> Self {
        Self::Hosts(hosts.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for BrokerList {
    fn from(hosts: [S; N]) -> Self {
        Self::Hosts(hosts.into_iter().map(Into::into).collect())
    }
}

fn split_entries(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(',').map(str::trim).filter(|e| !e.is_empty())
}

/// One named, typed Kafka cluster endpoint.
///
/// Equality, hashing and ordering ignore the order of brokers and of the
/// comma-separated zookeeper entries.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterConfig {
    #[serde(rename = "type")]
    cluster_type: String,
    name: String,
    broker_list: Vec<String>,
    zookeeper: String,
    #[serde(skip)]
    broker_set: BTreeSet<String>,
    #[serde(skip)]
    zookeeper_set: BTreeSet<String>,
}

impl ClusterConfig {
    pub fn new(
        cluster_type: impl Into<String>,
        name: impl Into<String>,
        broker_list: impl Into<BrokerList>,
        zookeeper: impl Into<String>,
    ) -> Self {
        let broker_list = broker_list.into().into_hosts();
        let zookeeper = zookeeper.into();

        let broker_set = broker_list.iter().cloned().collect();
        let zookeeper_set = split_entries(&zookeeper).map(str::to_string).collect();

        Self {
            cluster_type: cluster_type.into(),
            name: name.into(),
            broker_list,
            zookeeper,
            broker_set,
            zookeeper_set,
        }
    }

    pub fn cluster_type(&self) -> &str {
        &self.cluster_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Brokers in the order they were supplied.
    pub fn broker_list(&self) -> &[String] {
        &self.broker_list
    }

    /// The zookeeper connect string exactly as supplied.
    pub fn zookeeper(&self) -> &str {
        &self.zookeeper
    }

    /// Returns the broker list as a comma-separated string.
    pub fn bootstrap_servers(&self) -> String {
        self.broker_list.join(",")
    }

    /// Zookeeper entries in order of appearance, blanks removed.
    pub fn zookeeper_hosts(&self) -> Vec<&str> {
        split_entries(&self.zookeeper).collect()
    }

    fn canonical_key(&self) -> (&str, &str, &BTreeSet<String>, &BTreeSet<String>) {
        (
            &self.cluster_type,
            &self.name,
            &self.broker_set,
            &self.zookeeper_set,
        )
    }
}

impl PartialEq for ClusterConfig {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for ClusterConfig {}

impl Hash for ClusterConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

impl PartialOrd for ClusterConfig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClusterConfig {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_key().cmp(&other.canonical_key())
    }
}
