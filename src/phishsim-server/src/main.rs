//! PhishSim — phishing-awareness simulation dashboard backend.
//!
//! Main entry point that resolves the store mode, builds the gateway, and
//! starts the HTTP server.

use clap::Parser;
use phishsim_api::ApiServer;
use phishsim_core::config::AppConfig;
use phishsim_store::{CampaignGateway, StoreConfig};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "phishsim-server")]
#[command(about = "Phishing-awareness simulation dashboard backend")]
#[command(version)]
struct Cli {
    /// Instance identifier (overrides config)
    #[arg(long, env = "PHISHSIM__INSTANCE_ID")]
    instance_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "PHISHSIM__API__HTTP_PORT")]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phishsim=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("PhishSim starting up");

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    // Apply CLI overrides
    if let Some(instance_id) = cli.instance_id {
        config.instance_id = instance_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }

    // Resolve the store mode once; the gateway carries it from here on.
    let store_config = StoreConfig::resolve(&config.store);
    if !store_config.is_connected() {
        warn!("No campaign store configured; the dashboard will run on sample data");
    }

    info!(
        instance_id = %config.instance_id,
        http_port = config.api.http_port,
        store_mode = store_config.mode_label(),
        "Configuration loaded"
    );

    let gateway = Arc::new(CampaignGateway::new(
        store_config,
        config.store.connect_timeout_ms,
    )?);

    let api_server = ApiServer::new(config.clone(), gateway);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("PhishSim is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
