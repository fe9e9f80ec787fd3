//! From a descriptor file to the parameters handed to the Kafka clients.

use std::time::Duration;

use consumer_config::{
    ConsumerOptions, KafkaConsumerConfig, AUTO_COMMIT_INTERVAL_SECS, MAX_MESSAGE_SIZE_BYTES,
};
use integration_tests::fixtures::{TopologyDir, MOCK_TOPOLOGY_CONFIG};
use serde_json::json;
use topology_core::TopologyConfiguration;

fn local_cluster_consumer(options: ConsumerOptions) -> KafkaConsumerConfig {
    let dir = TopologyDir::new().with_descriptor("mykafka", MOCK_TOPOLOGY_CONFIG);
    let topology = TopologyConfiguration::with_base_path("mykafka", dir.path()).unwrap();
    KafkaConsumerConfig::new("my_group", topology.local_cluster().unwrap(), options)
}

#[test]
fn test_high_level_config_for_local_cluster() {
    let consumer = local_cluster_consumer(
        ConsumerOptions::new()
            .with_fetch_message_max_bytes(123)
            .with_auto_commit(false)
            .with_iter_timeout(Duration::from_secs(5)),
    );
    let config = consumer.kafka_consumer_config().to_map();

    assert_eq!(config["bootstrap_servers"], json!(["mybrokerhost1:9092"]));
    assert_eq!(config["group_id"], json!("my_group"));
    assert_eq!(config["fetch_message_max_bytes"], json!(123));
    assert_eq!(config["auto_commit_enable"], json!(false));
    assert_eq!(
        config["auto_commit_interval_ms"],
        json!(AUTO_COMMIT_INTERVAL_SECS * 1000)
    );
    assert_eq!(config["consumer_timeout_ms"], json!(5000));
}

#[test]
fn test_simple_args_from_loose_options() {
    let options = ConsumerOptions::from_map(
        json!({
            "auto_offset_reset": "smallest",
            "fetch_min_bytes": 456,
            "consumer_timeout_ms": 5000,
        })
        .as_object()
        .cloned()
        .unwrap(),
    )
    .unwrap();
    let args = local_cluster_consumer(options).simple_consumer_args().to_map();

    assert_eq!(args["buffer_size"], json!(MAX_MESSAGE_SIZE_BYTES));
    assert_eq!(args["auto_commit"], json!(true));
    assert_eq!(args["auto_offset_reset"], json!("smallest"));
    assert_eq!(args["fetch_size_bytes"], json!(456));
    assert_eq!(args["iter_timeout"], json!(5));
}

#[test]
fn test_consumer_configs_equal_across_descriptor_spellings() {
    let options = ConsumerOptions::new().with_buffer_size(1024);
    let consumer1 = local_cluster_consumer(options.clone());

    let dir = TopologyDir::new().with_descriptor(
        "mykafka",
        "clusters:\n  cluster1:\n    broker_list: \"mybrokerhost1:9092\"\n    zookeeper: \"0.2.3.4/kafka,0.1.2.3,\"\n",
    );
    let topology = TopologyConfiguration::with_base_path("mykafka", dir.path()).unwrap();
    let consumer2 = KafkaConsumerConfig::new(
        "my_group",
        topology.cluster_by_name("cluster1").unwrap(),
        options,
    );

    assert_eq!(consumer1, consumer2);
}
