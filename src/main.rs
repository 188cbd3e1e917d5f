use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use daterange_core::app_state::build_app_state;
use daterange_core::core::config::AppConfig;
use daterange_core::core::logging::init_tracing;
use daterange_core::debug::run_debug;
use daterange_core::routes::app_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let _log_guard = init_tracing(&config);

    let state = build_app_state(&config);

    if config.debug_mode {
        return run_debug(&state).await;
    }

    let app = app_router().with_state(state);

    let listener = TcpListener::bind(config.server_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server_addr))?;
    info!("🚀 Date range service listening on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(?err, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
