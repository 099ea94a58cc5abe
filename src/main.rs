//! Employee Manager Backend
//!
//! A REST API server for registering managers and managing their employees.
//! All data lives in memory and is seeded with sample records at startup.

use employee_manager_backend::{
    api,
    config::Config,
    logging,
    services::CredentialService,
    state::AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing; keep the guard alive so the log file is flushed
    let _log_guard = logging::init_logging(&config.logging)?;
    info!("Configuration loaded: {:?}", config);

    // Initialize application state
    let credentials = CredentialService::new(config.credentials)?;
    let app_state = if config.seed_sample_data {
        let state = AppState::seeded(credentials)?;
        info!(
            managers = state.managers().len(),
            employees = state.employees().len(),
            "Seeded sample data"
        );
        state
    } else {
        AppState::new(credentials)
    };
    let app_state = Arc::new(RwLock::new(app_state));

    let app = api::router(app_state, &config.server)?;

    // Bind to address from config
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    info!("Server running on http://{}", addr);
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Setup graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
