//! Kafka topology resolution: cluster endpoints, topology descriptors and
//! the configuration error shared across the workspace.

pub mod cluster;
pub mod descriptor;
pub mod error;
pub mod topology;

pub use cluster::*;
pub use descriptor::*;
pub use error::{ConfigurationError, Result};
pub use topology::*;
