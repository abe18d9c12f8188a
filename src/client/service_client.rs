//! [`ServiceClient`] — typed client for a running huginnd.
//!
//! Wraps the generated [`InfoServiceClient`] so callers work with native
//! types ([`ServerInfo`]) and crate errors instead of proto messages and
//! [`tonic::Status`]. Proto ↔ native conversions are centralized in
//! [`crate::convert`](crate).

use tonic::transport::Channel;

use crate::proto::GetInfoRequest;
use crate::proto::info_service_client::InfoServiceClient;
use crate::{HuginnError, Result, ServerInfo};

/// A client for a remote huginnd server.
pub struct ServiceClient {
    inner: InfoServiceClient<Channel>,
}

impl ServiceClient {
    /// Connect to a huginnd server at the given address.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = ServiceClient::connect("http://127.0.0.1:9791").await?;
    /// ```
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        let inner = InfoServiceClient::connect(addr.clone())
            .await
            .map_err(|e| HuginnError::Transport(format!("failed to connect to {addr}: {e}")))?;
        Ok(Self { inner })
    }

    /// Fetch the server's [`ServerInfo`].
    pub async fn server_info(&self) -> Result<ServerInfo> {
        let response = self
            .inner
            .clone()
            .get_info(GetInfoRequest::default())
            .await
            .map_err(from_status)?;
        Ok(response.into_inner().into())
    }
}

/// Convert [`tonic::Status`] to [`HuginnError`].
fn from_status(status: tonic::Status) -> HuginnError {
    match status.code() {
        tonic::Code::Unimplemented => HuginnError::NotImplemented(status.message().to_string()),
        tonic::Code::Unavailable => HuginnError::Transport(status.message().to_string()),
        code => HuginnError::Rpc {
            code,
            message: status.message().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unimplemented_status_maps_to_not_implemented() {
        let err = from_status(tonic::Status::unimplemented("GetVersion"));
        assert!(matches!(err, HuginnError::NotImplemented(_)));
        assert!(err.to_string().contains("GetVersion"));
    }

    #[test]
    fn unavailable_status_maps_to_transport() {
        let err = from_status(tonic::Status::unavailable("connection refused"));
        assert!(matches!(err, HuginnError::Transport(_)));
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err = from_status(tonic::Status::internal("boom"));
        match err {
            HuginnError::Rpc { code, message } => {
                assert_eq!(code, tonic::Code::Internal);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
