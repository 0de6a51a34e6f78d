//! # Roster Server
//!
//! Main entry point for the Roster user service: loads configuration,
//! connects and migrates the database, wires the service stack explicitly,
//! and serves the REST API until shutdown.

use roster_config::ConfigLoader;
use roster_core::{HealthCheck, RosterError, RosterResult};
use roster_repository::{create_pool, PgUserRepository};
use roster_rest::{create_router, AppState};
use roster_service::{UserService, UserServiceImpl};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

mod startup;

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    info!("Starting Roster Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> RosterResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    info!("Environment: {}", config.app.environment);

    startup::print_banner();

    // Create database pool and bring the schema up to date
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Wire the stack explicitly: repository → service → REST state
    let user_repository = Arc::new(PgUserRepository::new(Arc::clone(&db_pool)));
    let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(user_repository));
    let health: Arc<dyn HealthCheck> = db_pool.clone();

    let app_state = AppState::new(user_service, health);

    // Create REST router
    let router = create_router(app_state, &config.server);

    // Start REST server
    let addr = config.server.addr();
    startup::print_startup_info(config.server.port);
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| RosterError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RosterError::Internal(format!("REST server error: {}", e)))?;

    // Drain and close the pool before exiting
    db_pool.close().await;

    info!("Server shutdown complete");
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roster=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
