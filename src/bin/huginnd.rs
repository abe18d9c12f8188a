//! huginnd — huginn daemon.
//!
//! Serves `info.InfoService` over gRPC so clients can discover which
//! namespace this deployment manages.

use std::net::SocketAddr;

use clap::Parser;
use tonic::transport::Server;
use tracing::info;

use huginn::proto::info_service_server::InfoServiceServer;
use huginn::server::HuginnService;
use huginn::server::config::Config;
use huginn::{HuginnError, ServerInfo};

/// Huginn daemon — server info service.
#[derive(Parser)]
#[command(name = "huginnd")]
#[command(version = huginn::PKG_VERSION)]
#[command(about = "Huginn server info daemon")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Address to bind to (overrides config).
    #[arg(short, long, env = "HUGINND_ADDRESS")]
    address: Option<String>,

    /// Namespace this deployment manages (overrides config).
    #[arg(short, long, env = "HUGINND_MANAGED_NAMESPACE")]
    managed_namespace: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: info; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Load configuration; CLI flags override the file.
    let config = Config::load(args.config.as_deref())?;
    let address = args.address.unwrap_or(config.server.address);
    let managed_namespace = args
        .managed_namespace
        .or(config.instance.managed_namespace)
        .filter(|ns| !ns.is_empty());

    let addr: SocketAddr = address
        .parse()
        .map_err(|e| HuginnError::Configuration(format!("Invalid address: {e}")))?;

    let server_info = ServerInfo { managed_namespace };
    info!(
        version = huginn::version_string(),
        %addr,
        namespace = server_info.managed_namespace.as_deref().unwrap_or("(cluster-wide)"),
        "huginnd starting"
    );

    let service = HuginnService::new(server_info);
    let server = InfoServiceServer::new(service);

    Server::builder().add_service(server).serve(addr).await?;

    Ok(())
}
