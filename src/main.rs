//! Kafka topology resolver
//!
//! Resolves the configured cluster type into its clusters, picks the
//! configured (or local) cluster and prints the consumer parameters derived
//! for it:
//! - descriptor files under a base path, or the discovery service
//! - simple consumer arguments and high-level consumer configuration as JSON

use anyhow::{Context, Result};
use tracing::info;

use consumer_config::{ConsumerOptions, KafkaConsumerConfig};
use discovery::{get_kafka_discovery_client, resolve_topology, DiscoveryConfig};
use telemetry::{init_tracing, TracingConfig};
use topology_core::{TopologyConfiguration, DEFAULT_TOPOLOGY_BASE_PATH};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_cluster_type")]
    cluster_type: String,

    /// Directory holding `<cluster_type>.yaml` descriptors
    #[serde(default = "default_topology_base_path")]
    topology_base_path: String,

    /// Cluster to consume from, the local cluster when unset
    #[serde(default)]
    cluster: Option<String>,

    #[serde(default = "default_group_id")]
    group_id: String,

    /// Client id sent to the discovery service
    #[serde(default = "default_client_id")]
    client_id: String,

    #[serde(default)]
    consumer: ConsumerOptions,

    /// Fetch the topology from the discovery service instead of a file
    #[serde(default)]
    discovery: Option<DiscoveryConfig>,

    #[serde(default)]
    logging: TracingConfig,
}

fn default_cluster_type() -> String {
    "standard".to_string()
}

fn default_topology_base_path() -> String {
    DEFAULT_TOPOLOGY_BASE_PATH.to_string()
}

fn default_group_id() -> String {
    "kafka-topology".to_string()
}

fn default_client_id() -> String {
    "kafka-topology".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster_type: default_cluster_type(),
            topology_base_path: default_topology_base_path(),
            cluster: None,
            group_id: default_group_id(),
            client_id: default_client_id(),
            consumer: ConsumerOptions::default(),
            discovery: None,
            logging: TracingConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = load_config()?;

    init_tracing(&config.logging.clone().with_env_overrides());

    info!(
        cluster_type = %config.cluster_type,
        discovery = config.discovery.is_some(),
        "Resolving Kafka topology v{}",
        env!("CARGO_PKG_VERSION")
    );

    let topology = load_topology(&config).await?;

    let cluster = match &config.cluster {
        Some(name) => topology
            .cluster_by_name(name)
            .with_context(|| format!("Unknown cluster {}", name))?,
        None => topology
            .local_cluster()
            .context("Failed to resolve local cluster")?,
    };

    let consumer = KafkaConsumerConfig::new(&config.group_id, cluster, config.consumer.clone());

    let report = serde_json::json!({
        "cluster": consumer.cluster(),
        "logging_prefix": topology.scribe_local_prefix(),
        "simple_consumer_args": consumer.simple_consumer_args(),
        "kafka_consumer_config": consumer.kafka_consumer_config(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to render consumer config")?
    );

    Ok(())
}

/// Load the topology from the discovery service when configured, from the
/// descriptor file otherwise.
async fn load_topology(config: &Config) -> Result<TopologyConfiguration> {
    let client = get_kafka_discovery_client(&config.client_id, config.discovery.as_ref())
        .context("Failed to create discovery client")?;

    match client {
        Some(client) => resolve_topology(&client, &config.cluster_type)
            .await
            .context("Failed to fetch topology from discovery service"),
        None => TopologyConfiguration::with_base_path(
            &config.cluster_type,
            &config.topology_base_path,
        )
        .context("Failed to load topology descriptor"),
    }
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let file = std::env::var("KAFKA_TOPOLOGY_CONFIG").unwrap_or_else(|_| "config/default".to_string());

    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name(&file)
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("KAFKA_TOPOLOGY")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Single-underscore names for the settings most often set by hand
    if let Ok(cluster_type) = std::env::var("KAFKA_TOPOLOGY_CLUSTER_TYPE") {
        config.cluster_type = cluster_type;
    }
    if let Ok(base_path) = std::env::var("KAFKA_TOPOLOGY_BASE_PATH") {
        config.topology_base_path = base_path;
    }
    if let Ok(cluster) = std::env::var("KAFKA_TOPOLOGY_CLUSTER") {
        config.cluster = Some(cluster);
    }
    if let Ok(group_id) = std::env::var("KAFKA_TOPOLOGY_GROUP_ID") {
        config.group_id = group_id;
    }

    Ok(config)
}
