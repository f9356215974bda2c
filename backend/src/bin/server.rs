//! Forest Watch HTTP Server Binary
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin forest-watch-server
//!
//! # Reproducible reports
//! SIMULATION_SEED=42 PORT=8080 cargo run --bin forest-watch-server
//! ```
//!
//! See [`forest_watch::config`] for the configuration file and environment
//! variables. `RUST_LOG` takes `tracing` filter directives (default: info),
//! e.g. `RUST_LOG=forest_watch=debug`.

use std::fs;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use forest_watch::config::ServerConfig;
use forest_watch::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Forest Watch HTTP Server");

    let config = ServerConfig::load()?;
    let addr = config.socket_addr()?;

    if !config.static_dir.exists() {
        fs::create_dir_all(&config.static_dir)?;
        info!(dir = %config.static_dir.display(), "Created static directory");
    }

    match config.seed {
        Some(seed) => info!(seed, "Simulation seeded"),
        None => info!("Simulation seeded from OS entropy"),
    }

    let app = create_router(AppState::new(&config));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
