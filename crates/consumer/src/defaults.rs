//! Default values applied to consumer options.

use std::time::Duration;

/// Largest message the consumer expects to read (1MB).
///
/// Used as the initial read buffer so a single fetch can hold any message.
pub const MAX_MESSAGE_SIZE_BYTES: u64 = 1024 * 1024;

/// Time-based offset commit interval, in seconds.
pub const AUTO_COMMIT_INTERVAL_SECS: u64 = 1;

/// Message-count based offset commit trigger.
pub const AUTO_COMMIT_MSG_COUNT: u64 = 100;

/// Fetch size of the simple client when the caller sets none.
pub const FETCH_MIN_BYTES: u64 = 4096;

/// How long iteration blocks waiting for a message.
pub const MAX_ITERATOR_TIMEOUT: Duration = Duration::from_millis(100);

/// Where to start when the group has no committed offset.
pub const DEFAULT_OFFSET_RESET: &str = "largest";

pub const DEFAULT_CLIENT_ID: &str = "kafka-topology";

/// Wait after a group membership change before partitions are reassigned.
pub const PARTITIONER_COOLDOWN: Duration = Duration::from_secs(30);

/// Upper bound on a graceful consumer shutdown.
pub const MAX_TERMINATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Defaults of the high-level client, used when the caller does not
/// override them.
pub mod client {
    pub const SOCKET_TIMEOUT_MS: u64 = 30 * 1000;
    pub const FETCH_MESSAGE_MAX_BYTES: u64 = 1024 * 1024;
    pub const FETCH_MIN_BYTES: u64 = 1;
    pub const FETCH_WAIT_MAX_MS: u64 = 100;
    /// Block forever.
    pub const CONSUMER_TIMEOUT_MS: i64 = -1;
}
