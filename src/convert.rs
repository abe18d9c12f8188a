//! Conversions between proto and native types.
//!
//! Centralized here so the empty-string ⇔ `None` mapping for the managed
//! namespace exists in exactly one place.

use crate::proto::InfoResponse;
use crate::types::ServerInfo;

impl From<InfoResponse> for ServerInfo {
    fn from(proto: InfoResponse) -> Self {
        let managed_namespace = if proto.managed_namespace.is_empty() {
            None
        } else {
            Some(proto.managed_namespace)
        };
        ServerInfo { managed_namespace }
    }
}

impl From<ServerInfo> for InfoResponse {
    fn from(info: ServerInfo) -> Self {
        InfoResponse {
            managed_namespace: info.managed_namespace.unwrap_or_default(),
            ..Default::default()
        }
    }
}
