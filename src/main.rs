//! capsule-router server binary.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http server ─▶ routing ─▶ identity ─▶ page │
//!                           │   (axum)         (first      (client   handler│
//!     Client Response       │                   match)     cert)           │
//!     ◀─────────────────────┼── outcome → status ◀──────────────────────── │
//!                           │                                              │
//!                           │   config · observability (logs, metrics)     │
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use capsule_router::config::{load_config, AppConfig};
use capsule_router::http::{shutdown_signal, HttpServer};
use capsule_router::identity::{Anonymous, ClientCertResolver};
use capsule_router::observability::{logging, metrics};
use capsule_router::pages;

#[derive(Parser)]
#[command(name = "capsule-router")]
#[command(about = "Serve the built-in pages through the path-pattern router", long_about = None)]
struct Cli {
    /// TOML configuration file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);
    tracing::info!("capsule-router v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        identity_enabled = config.identity.enabled,
        "Configuration loaded"
    );

    // A broken route table must stop startup.
    let router = if config.identity.enabled {
        pages::router(ClientCertResolver)?
    } else {
        pages::router(Anonymous)?
    };

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config, router);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
