use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::portfolio::models::Portfolio;
use crate::portfolio::storage::PortfolioStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single portfolio being edited. Handlers hold the lock only for short,
    /// synchronous sections; rendering works on a clone.
    pub portfolio: Arc<RwLock<Portfolio>>,
    /// Pluggable persistence. Default: LocalFileStore. Swap via PORTFOLIO_STORAGE.
    pub store: Arc<dyn PortfolioStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn PortfolioStore>) -> Self {
        Self {
            portfolio: Arc::new(RwLock::new(Portfolio::default())),
            store,
            config,
        }
    }
}
