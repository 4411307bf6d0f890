//! Application state.

use greenlight_core::RepoRegistry;
use std::sync::Arc;

use crate::aggregator::StatusAggregator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RepoRegistry>,
    pub aggregator: Arc<StatusAggregator>,
}

impl AppState {
    pub fn new() -> Self {
        let registry = Arc::new(RepoRegistry::new());
        let aggregator = Arc::new(StatusAggregator::new(registry.clone()));

        Self {
            registry,
            aggregator,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
