//! hug — huginn CLI client
//!
//! Query interface for huginnd.

use clap::{Parser, Subcommand};

use huginn::ServiceClient;

/// Huginn CLI client
#[derive(Parser)]
#[command(name = "hug")]
#[command(version = huginn::PKG_VERSION)]
#[command(about = "Huginn server info client")]
struct Args {
    /// Server address
    #[arg(
        short,
        long,
        env = "HUGINND_ADDRESS",
        default_value = "http://127.0.0.1:9791"
    )]
    address: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show what the server manages
    Info {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let client = ServiceClient::connect(&args.address).await?;

    match args.command {
        Command::Info { json } => {
            let info = client.server_info().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                match info.managed_namespace.as_deref() {
                    Some(ns) => println!("managed namespace: {ns}"),
                    None => println!("cluster-wide"),
                }
            }
        }
    }

    Ok(())
}
