//! Topology resolution through the discovery service.

use std::collections::BTreeMap;

use discovery::{
    get_kafka_discovery_client, resolve_topology, DiscoveryClient, DiscoveryConfig,
};
use integration_tests::fixtures::{mock_topology_json, TopologyDir, MOCK_TOPOLOGY_CONFIG};
use integration_tests::stub::{DiscoveryStub, RecordedRequest};
use serde_json::json;
use topology_core::{ClusterConfig, ConfigurationError, TopologyConfiguration};

async fn start_stub() -> DiscoveryStub {
    let mut responses = BTreeMap::new();
    responses.insert("mykafka".to_string(), mock_topology_json());
    responses.insert("broken".to_string(), json!({ "clusters": 5 }));
    DiscoveryStub::start(responses).await
}

fn config_for(stub: &DiscoveryStub, dir: &TopologyDir) -> DiscoveryConfig {
    DiscoveryConfig::default().with_services_file(stub.write_registry(dir))
}

#[tokio::test]
async fn test_resolve_topology_through_discovery() {
    let stub = start_stub().await;
    let dir = TopologyDir::new();
    let config = config_for(&stub, &dir);

    let client = get_kafka_discovery_client("myclientid", Some(&config))
        .unwrap()
        .expect("discovery is configured");
    assert_eq!(client.base_url(), stub.base_url());

    let topology = resolve_topology(&client, "mykafka").await.unwrap();

    assert_eq!(
        topology.local_cluster().unwrap(),
        ClusterConfig::new(
            "mykafka",
            "cluster1",
            ["mybrokerhost1:9092"],
            "0.1.2.3,0.2.3.4/kafka",
        )
    );
    assert_eq!(topology.scribe_local_prefix(), Some("my.prefix."));
    assert_eq!(
        stub.requests(),
        vec![RecordedRequest {
            cluster_type: "mykafka".to_string(),
            client_name: Some("myclientid".to_string()),
        }]
    );
}

#[tokio::test]
async fn test_discovered_topology_equals_file_topology() {
    let stub = start_stub().await;
    let dir = TopologyDir::new().with_descriptor("mykafka", MOCK_TOPOLOGY_CONFIG);
    let config = config_for(&stub, &dir);

    let client = get_kafka_discovery_client("myclientid", Some(&config))
        .unwrap()
        .expect("discovery is configured");

    let discovered = resolve_topology(&client, "mykafka").await.unwrap();
    let from_file = TopologyConfiguration::with_base_path("mykafka", dir.path()).unwrap();

    assert_eq!(discovered, from_file);
}

#[tokio::test]
async fn test_unknown_cluster_type() {
    let stub = start_stub().await;
    let dir = TopologyDir::new();
    let config = config_for(&stub, &dir);
    let client = get_kafka_discovery_client("myclientid", Some(&config))
        .unwrap()
        .expect("discovery is configured");

    let result = client.fetch_topology("nope").await;
    assert!(matches!(result, Err(ConfigurationError::Discovery(_))));
}

#[tokio::test]
async fn test_malformed_discovery_response() {
    let stub = start_stub().await;
    let dir = TopologyDir::new();
    let config = config_for(&stub, &dir);
    let client = get_kafka_discovery_client("myclientid", Some(&config))
        .unwrap()
        .expect("discovery is configured");

    let result = client.fetch_topology("broken").await;
    assert!(matches!(result, Err(ConfigurationError::Parse { .. })));
}

#[test]
fn test_discovery_not_configured() {
    assert!(get_kafka_discovery_client("myclientid", None)
        .unwrap()
        .is_none());
}
