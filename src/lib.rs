//! Huginn — server info service for namespace-scoped control planes.
//!
//! A control plane can be deployed cluster-wide or scoped to a single
//! namespace, and its clients (UIs, CLIs, sibling services) need to know
//! which. Huginn answers that over gRPC with one unary RPC,
//! `info.InfoService/GetInfo`, returning an optional `managedNamespace`
//! string. Decoded messages keep any fields they do not recognize and
//! re-emit them verbatim, so older builds interoperate with newer schemas.
//!
//! # Client example
//!
//! ```rust,no_run
//! use huginn::ServiceClient;
//!
//! #[tokio::main]
//! async fn main() -> huginn::Result<()> {
//!     let client = ServiceClient::connect("http://127.0.0.1:9791").await?;
//!     let info = client.server_info().await?;
//!     match info.managed_namespace {
//!         Some(ns) => println!("managed namespace: {ns}"),
//!         None => println!("cluster-wide"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Embedding the server
//!
//! ```rust,no_run
//! use huginn::ServerInfo;
//! use huginn::proto::info_service_server::InfoServiceServer;
//! use huginn::server::HuginnService;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = HuginnService::new(ServerInfo::namespaced("team-a"));
//!     tonic::transport::Server::builder()
//!         .add_service(InfoServiceServer::new(service))
//!         .serve("127.0.0.1:9791".parse()?)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod client;
mod convert;
pub mod error;
pub mod proto;
pub mod server;
pub mod telemetry;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use client::ServiceClient;
pub use error::{HuginnError, Result};
pub use server::HuginnService;
pub use types::ServerInfo;
pub use version::{PKG_VERSION, version_string};
