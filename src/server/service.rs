//! gRPC service implementation.

use std::time::Instant;

use metrics::{counter, histogram};
use tonic::{Request, Response, Status};
use tracing::debug;

use crate::proto::info_service_server::InfoService;
use crate::proto::{GetInfoRequest, InfoResponse};
use crate::telemetry;
use crate::types::ServerInfo;

/// gRPC service that reports what this server instance manages.
///
/// The service holds an immutable [`ServerInfo`] snapshot taken at startup;
/// a server does not change its managed namespace while running.
pub struct HuginnService {
    info: ServerInfo,
}

impl HuginnService {
    /// Create a new service reporting the given [`ServerInfo`].
    pub fn new(info: ServerInfo) -> Self {
        Self { info }
    }
}

#[tonic::async_trait]
impl InfoService for HuginnService {
    async fn get_info(
        &self,
        _request: Request<GetInfoRequest>,
    ) -> Result<Response<InfoResponse>, Status> {
        let start = Instant::now();

        debug!(
            namespace = self.info.managed_namespace.as_deref().unwrap_or(""),
            "serving GetInfo"
        );
        let response = InfoResponse::from(self.info.clone());

        counter!(telemetry::REQUESTS_TOTAL, "method" => "get_info", "status" => "ok").increment(1);
        histogram!(telemetry::REQUEST_DURATION_SECONDS, "method" => "get_info")
            .record(start.elapsed().as_secs_f64());

        Ok(Response::new(response))
    }
}
