//! Application state for Axum handlers.

use roster_core::HealthCheck;
use roster_service::UserService;
use std::sync::Arc;

/// Shared application state.
///
/// Components are constructed once at startup and handed to the router;
/// handlers receive them by reference through this state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub health: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(user_service: Arc<dyn UserService>, health: Arc<dyn HealthCheck>) -> Self {
        Self {
            user_service,
            health,
        }
    }
}
