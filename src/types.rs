//! Native types exposed by the huginn API.

use serde::{Deserialize, Serialize};

/// What a server instance reports about itself.
///
/// The native counterpart of [`InfoResponse`](crate::proto::InfoResponse):
/// the proto's empty-string sentinel becomes `None` here, so callers never
/// have to remember which spelling means "cluster-wide".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Namespace this server manages, or `None` when it is cluster-wide.
    pub managed_namespace: Option<String>,
}

impl ServerInfo {
    /// Info for a server scoped to a single namespace.
    pub fn namespaced(namespace: impl Into<String>) -> Self {
        Self {
            managed_namespace: Some(namespace.into()),
        }
    }

    /// Info for a cluster-wide server.
    pub fn cluster_wide() -> Self {
        Self::default()
    }

    /// Whether this server is scoped to a single namespace.
    pub fn is_namespaced(&self) -> bool {
        self.managed_namespace.is_some()
    }
}
