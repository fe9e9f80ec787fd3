//! Kafka consumer configuration: option defaulting and the parameter sets
//! derived for the simple and high-level clients.

pub mod args;
pub mod config;
pub mod defaults;
pub mod options;

pub use args::*;
pub use config::*;
pub use defaults::{AUTO_COMMIT_INTERVAL_SECS, MAX_MESSAGE_SIZE_BYTES};
pub use options::*;
