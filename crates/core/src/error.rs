//! Configuration error type shared by every crate in the workspace.
//!
//! There is a single error kind: anything that prevents a topology or a
//! consumer configuration from being resolved is a `ConfigurationError`.
//! Callers decide whether to abort startup or fall back.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`ConfigurationError`].
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Unified configuration error.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The descriptor file does not exist.
    #[error("topology descriptor {} does not exist", path.display())]
    MissingDescriptor { path: PathBuf },

    /// The descriptor file exists but could not be read.
    #[error("failed to read topology descriptor {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor could not be parsed into the expected shape.
    #[error("malformed topology descriptor {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// The topology does not designate a local cluster at all.
    #[error("no local cluster configured for cluster type {cluster_type}")]
    NoLocalCluster { cluster_type: String },

    /// The local cluster named by the descriptor is not one of its clusters.
    #[error("local cluster {name} is not defined for cluster type {cluster_type}")]
    UnknownLocalCluster { cluster_type: String, name: String },

    /// No cluster with the requested name exists.
    #[error("cluster {name} not found for cluster type {cluster_type}")]
    UnknownCluster { cluster_type: String, name: String },

    /// The discovery service could not be resolved or queried.
    #[error("discovery error: {0}")]
    Discovery(String),
}

impl ConfigurationError {
    pub fn missing_descriptor(path: impl Into<PathBuf>) -> Self {
        Self::MissingDescriptor { path: path.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }

    pub fn no_local_cluster(cluster_type: impl Into<String>) -> Self {
        Self::NoLocalCluster {
            cluster_type: cluster_type.into(),
        }
    }

    pub fn unknown_local_cluster(cluster_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownLocalCluster {
            cluster_type: cluster_type.into(),
            name: name.into(),
        }
    }

    pub fn unknown_cluster(cluster_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownCluster {
            cluster_type: cluster_type.into(),
            name: name.into(),
        }
    }

    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }

    /// Returns true when the error means a cluster lookup found nothing.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::NoLocalCluster { .. } | Self::UnknownLocalCluster { .. } | Self::UnknownCluster { .. }
        )
    }
}
