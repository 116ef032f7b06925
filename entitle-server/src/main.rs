//! Entitle license key server
//!
//! Serves the license key API over HTTP. Every platform is answered with the
//! lifetime enterprise license; applied limits are persisted either in memory
//! or in a SQLite file.
//!
//! Usage:
//!   entitle-server --port 4100 --db plans.db

use std::{path::PathBuf, sync::Arc};
use anyhow::{Context, Result};
use clap::Parser;
use entitle_keys::{
    InMemoryPlanStore, LicenseKeysConfig, LicenseKeysService, PlatformPlanStore, SqlitePlanStore,
    SECRETS_MANAGER_LICENSE_KEYS_ROUTE,
};
use entitle_server::build_router;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "entitle-server")]
#[command(about = "License key service for the platform API")]
struct Args {
    /// HTTP port to listen on
    #[arg(short, long, default_value = "4100")]
    port: u16,

    /// SQLite file for platform plans (in-memory when omitted)
    #[arg(long)]
    db: Option<PathBuf>,

    /// License-keys route on the secrets manager
    #[arg(long, default_value = SECRETS_MANAGER_LICENSE_KEYS_ROUTE)]
    secrets_manager_route: String,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Entitle license server starting...");

    let store: Arc<dyn PlatformPlanStore> = match &args.db {
        Some(path) => {
            info!("Using SQLite plan store at {:?}", path);
            Arc::new(
                SqlitePlanStore::open(path)
                    .with_context(|| format!("Failed to open plan store at {}", path.display()))?,
            )
        }
        None => {
            info!("Using in-memory plan store");
            Arc::new(InMemoryPlanStore::new())
        }
    };

    let config = LicenseKeysConfig {
        secrets_manager_route: args.secrets_manager_route,
    };
    let service = LicenseKeysService::with_config(store, config);
    let app = build_router(service);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", args.port))
        .await
        .with_context(|| format!("Failed to bind HTTP port {}", args.port))?;
    info!("HTTP API listening on port {}", args.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Entitle license server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
