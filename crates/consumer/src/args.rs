//! Parameter sets handed to the Kafka clients.
//!
//! Field names and units are the clients' own: the simple client takes
//! `iter_timeout` in seconds and `auto_commit_every_t` in milliseconds, the
//! high-level client takes everything in milliseconds.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::options::seconds;

/// Arguments of the low-level ("simple") consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleConsumerArgs {
    pub buffer_size: u64,
    pub max_buffer_size: Option<u64>,
    pub auto_commit: bool,
    pub auto_commit_every_n: u64,
    /// Milliseconds
    pub auto_commit_every_t: u64,
    pub auto_offset_reset: String,
    pub fetch_size_bytes: u64,
    /// Seconds, `None` blocks forever
    #[serde(with = "seconds::option")]
    pub iter_timeout: Option<Duration>,
}

/// Configuration of the high-level consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KafkaClientConfig {
    pub bootstrap_servers: Vec<String>,
    pub group_id: String,
    pub client_id: String,
    pub auto_commit_enable: bool,
    pub auto_commit_interval_ms: u64,
    pub auto_commit_interval_messages: u64,
    pub auto_offset_reset: String,
    pub fetch_message_max_bytes: u64,
    pub fetch_min_bytes: u64,
    pub fetch_wait_max_ms: u64,
    pub socket_timeout_ms: u64,
    /// Negative blocks forever
    pub consumer_timeout_ms: i64,
    /// Pass-through options the caller supplied
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl KafkaClientConfig {
    /// Names of the fields this struct sets itself.
    pub const FIELDS: &'static [&'static str] = &[
        "bootstrap_servers",
        "group_id",
        "client_id",
        "auto_commit_enable",
        "auto_commit_interval_ms",
        "auto_commit_interval_messages",
        "auto_offset_reset",
        "fetch_message_max_bytes",
        "fetch_min_bytes",
        "fetch_wait_max_ms",
        "socket_timeout_ms",
        "consumer_timeout_ms",
    ];
}

impl SimpleConsumerArgs {
    /// The arguments as a name to value mapping.
    pub fn to_map(&self) -> Map<String, Value> {
        to_map(self)
    }
}

impl KafkaClientConfig {
    /// The configuration as a name to value mapping.
    pub fn to_map(&self) -> Map<String, Value> {
        to_map(self)
    }
}

fn to_map<T: Serialize>(value: &T) -> Map<String, Value> {
    // Plain structs with string keys always serialize to an object.
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
