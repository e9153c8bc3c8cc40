mod config;
mod errors;
mod portfolio;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::portfolio::storage::{LocalFileStore, MemoryStore, PortfolioStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on invalid values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ProFolio v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config);
    let state = AppState::new(config.clone(), store);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the persistence backend named by `PORTFOLIO_STORAGE`.
fn build_store(config: &Config) -> Arc<dyn PortfolioStore> {
    match config.storage {
        StorageBackend::File => {
            let store = LocalFileStore::new(&config.data_dir, &config.storage_key);
            info!("Portfolio store: {}", store.path().display());
            Arc::new(store)
        }
        StorageBackend::Memory => {
            info!("Portfolio store: in-memory (not persisted across restarts)");
            Arc::new(MemoryStore::default())
        }
    }
}
