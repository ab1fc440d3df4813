use std::sync::Arc;

use crate::config::Config;
use crate::repository::DashboardRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Data source. Default: `MockRepository` seeded with the demo session.
    pub repo: Arc<dyn DashboardRepository>,
    pub config: Config,
}
