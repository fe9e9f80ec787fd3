//! Caller-supplied consumer options.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use topology_core::{ConfigurationError, Result};

/// Where consumer groups store committed offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetStorage {
    #[default]
    Zookeeper,
    Kafka,
    /// Commit to both, read from Kafka
    Dual,
}

/// Consumer options with every recognized key as a named field.
///
/// Unset fields take their defaults when a
/// [`KafkaConsumerConfig`](crate::KafkaConsumerConfig) is built. Keys that are
/// not recognized are kept in `extra` and handed to the high-level client
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumerOptions {
    /// Initial read buffer in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_size: Option<u64>,
    /// Cap on buffer growth in bytes, unbounded when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_buffer_size: Option<u64>,
    #[serde(alias = "auto_commit_enable", skip_serializing_if = "Option::is_none")]
    pub auto_commit: Option<bool>,
    /// Commit after this many messages
    #[serde(
        alias = "auto_commit_interval_messages",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_commit_every_n: Option<u64>,
    /// Commit after this many seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_commit_every_t: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_size_bytes: Option<u64>,
    /// Iteration timeout in seconds
    #[serde(with = "seconds::option", skip_serializing_if = "Option::is_none")]
    pub iter_timeout: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_offset_reset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_min_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_message_max_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_wait_max_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_timeout_ms: Option<u64>,
    /// Iteration timeout in milliseconds, negative blocks forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumer_timeout_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(with = "seconds::option", skip_serializing_if = "Option::is_none")]
    pub partitioner_cooldown: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_group_sha: Option<bool>,
    #[serde(with = "seconds::option", skip_serializing_if = "Option::is_none")]
    pub max_termination_timeout: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_storage: Option<OffsetStorage>,
    /// Unrecognized options, passed through as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ConsumerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds options from a loose name to value mapping.
    ///
    /// Unknown names never fail; a recognized name with a value of the wrong
    /// type does.
    pub fn from_map(map: serde_json::Map<String, Value>) -> Result<Self> {
        serde_json::from_value(Value::Object(map))
            .map_err(|e| ConfigurationError::parse("consumer options", e))
    }

    pub fn with_buffer_size(mut self, bytes: u64) -> Self {
        self.buffer_size = Some(bytes);
        self
    }

    pub fn with_max_buffer_size(mut self, bytes: u64) -> Self {
        self.max_buffer_size = Some(bytes);
        self
    }

    pub fn with_auto_commit(mut self, enabled: bool) -> Self {
        self.auto_commit = Some(enabled);
        self
    }

    pub fn with_auto_commit_every_n(mut self, messages: u64) -> Self {
        self.auto_commit_every_n = Some(messages);
        self
    }

    pub fn with_auto_commit_every_t(mut self, secs: u64) -> Self {
        self.auto_commit_every_t = Some(secs);
        self
    }

    pub fn with_fetch_size_bytes(mut self, bytes: u64) -> Self {
        self.fetch_size_bytes = Some(bytes);
        self
    }

    pub fn with_iter_timeout(mut self, timeout: Duration) -> Self {
        self.iter_timeout = Some(timeout);
        self
    }

    pub fn with_auto_offset_reset(mut self, reset: impl Into<String>) -> Self {
        self.auto_offset_reset = Some(reset.into());
        self
    }

    pub fn with_fetch_min_bytes(mut self, bytes: u64) -> Self {
        self.fetch_min_bytes = Some(bytes);
        self
    }

    pub fn with_fetch_message_max_bytes(mut self, bytes: u64) -> Self {
        self.fetch_message_max_bytes = Some(bytes);
        self
    }

    pub fn with_fetch_wait_max_ms(mut self, ms: u64) -> Self {
        self.fetch_wait_max_ms = Some(ms);
        self
    }

    pub fn with_socket_timeout_ms(mut self, ms: u64) -> Self {
        self.socket_timeout_ms = Some(ms);
        self
    }

    pub fn with_consumer_timeout_ms(mut self, ms: i64) -> Self {
        self.consumer_timeout_ms = Some(ms);
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_offset_storage(mut self, storage: OffsetStorage) -> Self {
        self.offset_storage = Some(storage);
        self
    }

    /// Adds an option this crate does not know about.
    pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

/// Durations expressed as (possibly fractional) seconds.
///
/// Whole seconds serialize as integers so `5s` reads back as `5`.
pub(crate) mod seconds {
    pub mod option {
        use std::time::Duration;

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<Duration>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(d) if d.subsec_nanos() == 0 => serializer.serialize_u64(d.as_secs()),
                Some(d) => serializer.serialize_f64(d.as_secs_f64()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Duration>, D::Error> {
            match Option::<f64>::deserialize(deserializer)? {
                Some(secs) if secs.is_finite() && secs >= 0.0 => {
                    Ok(Some(Duration::from_secs_f64(secs)))
                }
                Some(secs) => Err(D::Error::custom(format!(
                    "expected a non-negative number of seconds, got {}",
                    secs
                ))),
                None => Ok(None),
            }
        }
    }
}
