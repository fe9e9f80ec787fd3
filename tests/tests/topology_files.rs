//! Topology resolution from descriptor files on disk.

use integration_tests::fixtures::{
    TopologyDir, MOCK_MISSING_LOCAL_CONFIG, MOCK_NO_SCRIBE_CONFIG, MOCK_TOPOLOGY_CONFIG,
};
use topology_core::{ClusterConfig, ConfigurationError, TopologyConfiguration};

#[test]
fn test_missing_descriptor_file() {
    let dir = TopologyDir::new();

    let result = TopologyConfiguration::with_base_path("wrong_cluster", dir.path());
    assert!(matches!(
        result,
        Err(ConfigurationError::MissingDescriptor { .. })
    ));
}

#[test]
fn test_malformed_descriptor_file() {
    let dir = TopologyDir::new().with_descriptor("mykafka", "clusters: [not, a, mapping]\n");

    let result = TopologyConfiguration::with_base_path("mykafka", dir.path());
    assert!(matches!(result, Err(ConfigurationError::Parse { .. })));
}

#[test]
fn test_local_cluster_and_prefix() {
    let dir = TopologyDir::new().with_descriptor("mykafka", MOCK_TOPOLOGY_CONFIG);
    let topology = TopologyConfiguration::with_base_path("mykafka", dir.path()).unwrap();

    let expected = ClusterConfig::new(
        "mykafka",
        "cluster1",
        ["mybrokerhost1:9092"],
        "0.1.2.3,0.2.3.4/kafka",
    );
    assert_eq!(topology.local_cluster().unwrap(), expected);
    assert_eq!(topology.scribe_local_prefix(), Some("my.prefix."));
    assert_eq!(topology.all_clusters().len(), 2);
    assert!(topology.source().ends_with("mykafka.yaml"));
}

#[test]
fn test_no_prefix_and_joined_brokers() {
    let dir = TopologyDir::new().with_descriptor("mykafka", MOCK_NO_SCRIBE_CONFIG);
    let topology = TopologyConfiguration::with_base_path("mykafka", dir.path()).unwrap();

    assert!(topology.scribe_local_prefix().is_none());
    // Zookeeper entries are listed in a different order than in the scribe fixture
    assert_eq!(
        topology.cluster_by_name("cluster1").unwrap(),
        ClusterConfig::new(
            "mykafka",
            "cluster1",
            vec!["mybrokerhost1:9092"],
            "0.1.2.3,0.2.3.4/kafka",
        )
    );
}

#[test]
fn test_local_cluster_not_in_clusters() {
    let dir = TopologyDir::new().with_descriptor("mykafka", MOCK_MISSING_LOCAL_CONFIG);
    let topology = TopologyConfiguration::with_base_path("mykafka", dir.path()).unwrap();

    assert!(matches!(
        topology.local_cluster(),
        Err(ConfigurationError::UnknownLocalCluster { .. })
    ));
}

#[test]
fn test_equality_ignores_source_path() {
    let first = TopologyDir::new().with_descriptor("scribe", MOCK_TOPOLOGY_CONFIG);
    let second = TopologyDir::new().with_descriptor("scribe", MOCK_NO_SCRIBE_CONFIG);

    let topology1 = TopologyConfiguration::with_base_path("scribe", first.path()).unwrap();
    let topology2 = TopologyConfiguration::with_base_path("scribe", second.path()).unwrap();

    // Same clusters, only the prefix and the spelling of the lists differ
    assert_eq!(topology1, topology2);
    assert_ne!(topology1.source(), topology2.source());

    let other_type = TopologyDir::new().with_descriptor("no_scribe", MOCK_NO_SCRIBE_CONFIG);
    let topology3 = TopologyConfiguration::with_base_path("no_scribe", other_type.path()).unwrap();
    assert_ne!(topology1, topology3);
}
