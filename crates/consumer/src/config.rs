//! Kafka consumer configuration.

use std::time::Duration;

use topology_core::ClusterConfig;
use tracing::{debug, warn};

use crate::args::{KafkaClientConfig, SimpleConsumerArgs};
use crate::defaults::{self, client};
use crate::options::{ConsumerOptions, OffsetStorage};

/// Consumer configuration for one group on one cluster.
///
/// Two configurations are equal when the group, the cluster and the effective
/// settings are equal. An option set to its default equals the option left
/// unset, and options that resolve to the same client settings are equal.
#[derive(Debug, Clone)]
pub struct KafkaConsumerConfig {
    group_id: String,
    cluster: ClusterConfig,
    options: ConsumerOptions,
}

impl KafkaConsumerConfig {
    pub fn new(group_id: impl Into<String>, cluster: ClusterConfig, options: ConsumerOptions) -> Self {
        let group_id = group_id.into();
        let options = with_defaults(options);

        debug!(
            group_id = %group_id,
            cluster = %cluster.name(),
            extra_options = options.extra.len(),
            "Built Kafka consumer config"
        );

        Self {
            group_id,
            cluster,
            options,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn cluster(&self) -> &ClusterConfig {
        &self.cluster
    }

    /// Effective options, defaults filled in.
    pub fn options(&self) -> &ConsumerOptions {
        &self.options
    }

    pub fn client_id(&self) -> &str {
        self.options
            .client_id
            .as_deref()
            .unwrap_or(defaults::DEFAULT_CLIENT_ID)
    }

    pub fn buffer_size(&self) -> u64 {
        self.options
            .buffer_size
            .unwrap_or(defaults::MAX_MESSAGE_SIZE_BYTES)
    }

    pub fn auto_commit(&self) -> bool {
        self.options.auto_commit.unwrap_or(true)
    }

    pub fn auto_commit_every_n(&self) -> u64 {
        self.options
            .auto_commit_every_n
            .unwrap_or(defaults::AUTO_COMMIT_MSG_COUNT)
    }

    /// Time-based commit interval in seconds.
    pub fn auto_commit_every_t(&self) -> u64 {
        self.options
            .auto_commit_every_t
            .unwrap_or(defaults::AUTO_COMMIT_INTERVAL_SECS)
    }

    /// Time-based commit interval in milliseconds, saturating.
    pub fn auto_commit_interval_ms(&self) -> u64 {
        self.auto_commit_every_t().saturating_mul(1000)
    }

    pub fn max_buffer_size(&self) -> Option<u64> {
        self.options.max_buffer_size
    }

    pub fn auto_offset_reset(&self) -> &str {
        self.options
            .auto_offset_reset
            .as_deref()
            .unwrap_or(defaults::DEFAULT_OFFSET_RESET)
    }

    /// Fetch size of the simple client.
    pub fn fetch_size_bytes(&self) -> u64 {
        self.options
            .fetch_size_bytes
            .or(self.options.fetch_min_bytes)
            .unwrap_or(defaults::FETCH_MIN_BYTES)
    }

    pub fn fetch_message_max_bytes(&self) -> u64 {
        self.options
            .fetch_message_max_bytes
            .unwrap_or(client::FETCH_MESSAGE_MAX_BYTES)
    }

    pub fn fetch_min_bytes(&self) -> u64 {
        self.options
            .fetch_min_bytes
            .unwrap_or(client::FETCH_MIN_BYTES)
    }

    pub fn fetch_wait_max_ms(&self) -> u64 {
        self.options
            .fetch_wait_max_ms
            .unwrap_or(client::FETCH_WAIT_MAX_MS)
    }

    pub fn socket_timeout_ms(&self) -> u64 {
        self.options
            .socket_timeout_ms
            .unwrap_or(client::SOCKET_TIMEOUT_MS)
    }

    /// How long iterating over messages may block, `None` for forever.
    ///
    /// An explicit `iter_timeout` wins; otherwise `consumer_timeout_ms` is
    /// floored to whole seconds.
    pub fn iter_timeout(&self) -> Option<Duration> {
        match (self.options.iter_timeout, self.options.consumer_timeout_ms) {
            (Some(timeout), _) => Some(timeout),
            (None, Some(ms)) if ms >= 0 => Some(Duration::from_secs(ms as u64 / 1000)),
            (None, Some(_)) => None,
            (None, None) => Some(defaults::MAX_ITERATOR_TIMEOUT),
        }
    }

    /// Iteration timeout in the high-level client's milliseconds.
    pub fn consumer_timeout_ms(&self) -> i64 {
        if let Some(ms) = self.options.consumer_timeout_ms {
            return ms;
        }
        match self.iter_timeout() {
            Some(timeout) => i64::try_from(timeout.as_millis()).unwrap_or(i64::MAX),
            None => client::CONSUMER_TIMEOUT_MS,
        }
    }

    pub fn partitioner_cooldown(&self) -> Duration {
        self.options
            .partitioner_cooldown
            .unwrap_or(defaults::PARTITIONER_COOLDOWN)
    }

    /// Whether group paths use a hash of the group id.
    pub fn use_group_sha(&self) -> bool {
        self.options.use_group_sha.unwrap_or(true)
    }

    pub fn max_termination_timeout(&self) -> Duration {
        self.options
            .max_termination_timeout
            .unwrap_or(defaults::MAX_TERMINATION_TIMEOUT)
    }

    pub fn offset_storage(&self) -> OffsetStorage {
        self.options.offset_storage.unwrap_or_default()
    }

    /// Arguments for the low-level ("simple") consumer.
    pub fn simple_consumer_args(&self) -> SimpleConsumerArgs {
        SimpleConsumerArgs {
            buffer_size: self.buffer_size(),
            max_buffer_size: self.max_buffer_size(),
            auto_commit: self.auto_commit(),
            auto_commit_every_n: self.auto_commit_every_n(),
            auto_commit_every_t: self.auto_commit_interval_ms(),
            auto_offset_reset: self.auto_offset_reset().to_string(),
            fetch_size_bytes: self.fetch_size_bytes(),
            iter_timeout: self.iter_timeout(),
        }
    }

    /// Configuration for the high-level consumer.
    pub fn kafka_consumer_config(&self) -> KafkaClientConfig {
        let mut extra = self.options.extra.clone();
        extra.retain(|name, _| {
            let reserved = KafkaClientConfig::FIELDS.contains(&name.as_str());
            if reserved {
                warn!(
                    group_id = %self.group_id,
                    option = %name,
                    "Ignoring pass-through option that shadows a derived setting"
                );
            }
            !reserved
        });

        KafkaClientConfig {
            bootstrap_servers: self.cluster.broker_list().to_vec(),
            group_id: self.group_id.clone(),
            client_id: self.client_id().to_string(),
            auto_commit_enable: self.auto_commit(),
            auto_commit_interval_ms: self.auto_commit_interval_ms(),
            auto_commit_interval_messages: self.auto_commit_every_n(),
            auto_offset_reset: self.auto_offset_reset().to_string(),
            fetch_message_max_bytes: self.fetch_message_max_bytes(),
            fetch_min_bytes: self.fetch_min_bytes(),
            fetch_wait_max_ms: self.fetch_wait_max_ms(),
            socket_timeout_ms: self.socket_timeout_ms(),
            consumer_timeout_ms: self.consumer_timeout_ms(),
            extra,
        }
    }

    /// Settings after defaulting and derivation, the basis of equality.
    #[allow(clippy::type_complexity)]
    fn effective(
        &self,
    ) -> (
        (u64, Option<u64>, bool, u64, u64, &str, u64, Option<Duration>),
        (&str, u64, u64, u64, u64, i64),
        (Duration, bool, Duration, OffsetStorage),
    ) {
        (
            (
                self.buffer_size(),
                self.max_buffer_size(),
                self.auto_commit(),
                self.auto_commit_every_n(),
                self.auto_commit_interval_ms(),
                self.auto_offset_reset(),
                self.fetch_size_bytes(),
                self.iter_timeout(),
            ),
            (
                self.client_id(),
                self.fetch_message_max_bytes(),
                self.fetch_min_bytes(),
                self.fetch_wait_max_ms(),
                self.socket_timeout_ms(),
                self.consumer_timeout_ms(),
            ),
            (
                self.partitioner_cooldown(),
                self.use_group_sha(),
                self.max_termination_timeout(),
                self.offset_storage(),
            ),
        )
    }
}

impl PartialEq for KafkaConsumerConfig {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.cluster == other.cluster
            && self.options.extra == other.options.extra
            && self.effective() == other.effective()
    }
}

impl Eq for KafkaConsumerConfig {}

/// Fills in the options whose default does not depend on other options.
fn with_defaults(mut options: ConsumerOptions) -> ConsumerOptions {
    options
        .buffer_size
        .get_or_insert(defaults::MAX_MESSAGE_SIZE_BYTES);
    options.auto_commit.get_or_insert(true);
    options
        .auto_commit_every_n
        .get_or_insert(defaults::AUTO_COMMIT_MSG_COUNT);
    options
        .auto_commit_every_t
        .get_or_insert(defaults::AUTO_COMMIT_INTERVAL_SECS);
    options
        .auto_offset_reset
        .get_or_insert_with(|| defaults::DEFAULT_OFFSET_RESET.to_string());
    options
        .client_id
        .get_or_insert_with(|| defaults::DEFAULT_CLIENT_ID.to_string());
    options
        .partitioner_cooldown
        .get_or_insert(defaults::PARTITIONER_COOLDOWN);
    options.use_group_sha.get_or_insert(true);
    options
        .max_termination_timeout
        .get_or_insert(defaults::MAX_TERMINATION_TIMEOUT);
    options.offset_storage.get_or_insert(OffsetStorage::default());
    options
}
