use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::navigation::Navigator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The one current page. Starts on Home and lives as long as the server.
    pub navigation: Arc<RwLock<Navigator>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            navigation: Arc::new(RwLock::new(Navigator::new())),
        }
    }
}
