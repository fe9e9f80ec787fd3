//! Dynamic topology discovery.
//!
//! Deployments without a static descriptor file ask the discovery service
//! for it. The client is optional: without a [`DiscoveryConfig`] the factory
//! returns `None` and callers fall back to the descriptor file.

pub mod client;
pub mod config;
pub mod factory;
pub mod registry;

pub use client::*;
pub use config::*;
pub use factory::*;
pub use registry::*;
