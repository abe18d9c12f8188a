//! Messages and service stubs for `info.InfoService`.
//!
//! Schema of record: `proto/info.proto`. The stub modules mirror what
//! `tonic-build` 0.12 emits for this service so that callers see the familiar
//! generated API; the message impls differ from derived ones only in routing
//! unrecognized fields into an [`UnknownFieldSet`] instead of skipping them.

use prost::bytes::{Buf, BufMut};
use prost::encoding::{DecodeContext, WireType, string};
use prost::{DecodeError, Message};

use super::unknown::UnknownFieldSet;

/// Empty request for `InfoService.GetInfo`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct GetInfoRequest {
    /// Fields this schema does not know about, preserved verbatim.
    pub unknown_fields: UnknownFieldSet,
}

impl Message for GetInfoRequest {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        self.unknown_fields.encode_raw(buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        _ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        self.unknown_fields.capture(tag, wire_type, buf)
    }

    fn encoded_len(&self) -> usize {
        self.unknown_fields.encoded_len()
    }

    fn clear(&mut self) {
        self.unknown_fields.clear();
    }
}

/// What the server reports about itself.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct InfoResponse {
    /// Namespace this server is scoped to; empty when it is cluster-wide.
    /// Proto field 1, `managedNamespace`.
    pub managed_namespace: String,
    /// Fields this schema does not know about, preserved verbatim.
    pub unknown_fields: UnknownFieldSet,
}

impl Message for InfoResponse {
    fn encode_raw(&self, buf: &mut impl BufMut) {
        if !self.managed_namespace.is_empty() {
            string::encode(1u32, &self.managed_namespace, buf);
        }
        self.unknown_fields.encode_raw(buf);
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        match tag {
            1u32 => string::merge(wire_type, &mut self.managed_namespace, buf, ctx).map_err(
                |mut error| {
                    error.push("InfoResponse", "managed_namespace");
                    error
                },
            ),
            _ => self.unknown_fields.capture(tag, wire_type, buf),
        }
    }

    fn encoded_len(&self) -> usize {
        (if self.managed_namespace.is_empty() {
            0
        } else {
            string::encoded_len(1u32, &self.managed_namespace)
        }) + self.unknown_fields.encoded_len()
    }

    fn clear(&mut self) {
        self.managed_namespace.clear();
        self.unknown_fields.clear();
    }
}

/// Client stub for `info.InfoService`.
pub mod info_service_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::http::Uri;
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct InfoServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl InfoServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> InfoServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }

        /// Report what the server instance manages.
        pub async fn get_info(
            &mut self,
            request: impl tonic::IntoRequest<super::GetInfoRequest>,
        ) -> std::result::Result<tonic::Response<super::InfoResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/info.InfoService/GetInfo");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("info.InfoService", "GetInfo"));
            self.inner.unary(req, path, codec).await
        }
    }
}

/// Server stub for `info.InfoService`.
pub mod info_service_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;

    /// Handler trait to implement for use with [`InfoServiceServer`].
    #[async_trait]
    pub trait InfoService: Send + Sync + 'static {
        /// Report what the server instance manages.
        async fn get_info(
            &self,
            request: tonic::Request<super::GetInfoRequest>,
        ) -> std::result::Result<tonic::Response<super::InfoResponse>, tonic::Status>;
    }

    #[derive(Debug)]
    pub struct InfoServiceServer<T: InfoService> {
        inner: Arc<T>,
    }

    impl<T: InfoService> InfoServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }

        pub fn from_arc(inner: Arc<T>) -> Self {
            Self { inner }
        }

        pub fn with_interceptor<F>(inner: T, interceptor: F) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
    }

    impl<T, B> tonic::codegen::Service<http::Request<B>> for InfoServiceServer<T>
    where
        T: InfoService,
        B: Body + Send + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;

        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/info.InfoService/GetInfo" => {
                    #[allow(non_camel_case_types)]
                    struct GetInfoSvc<T: InfoService>(pub Arc<T>);
                    impl<T: InfoService> tonic::server::UnaryService<super::GetInfoRequest>
                        for GetInfoSvc<T>
                    {
                        type Response = super::InfoResponse;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::GetInfoRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut =
                                async move { <T as InfoService>::get_info(&inner, request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetInfoSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec);
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", tonic::Code::Unimplemented as i32)
                        .header(
                            http::header::CONTENT_TYPE,
                            tonic::metadata::GRPC_CONTENT_TYPE,
                        )
                        .body(empty_body())
                        .unwrap())
                }),
            }
        }
    }

    impl<T: InfoService> Clone for InfoServiceServer<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }

    impl<T: InfoService> tonic::server::NamedService for InfoServiceServer<T> {
        const NAME: &'static str = "info.InfoService";
    }
}
