//! Structured logging for the topology tools.

pub mod tracing_setup;

pub use tracing_setup::*;
