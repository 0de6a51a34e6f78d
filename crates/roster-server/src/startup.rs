//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ____            __
   / __ \____  ___ / /____  _____
  / /_/ / __ \/ __/ __/ _ \/ ___/
 / _, _/ /_/ (__ ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/

            User Service
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}", port);
    info!("Health:    http://0.0.0.0:{}/health", port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    info!("{}", separator);
}
