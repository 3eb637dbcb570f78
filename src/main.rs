//! Tomato Clock - a session/break countdown timer
//!
//! This is the main entry point for the tomato-clock server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use tomato_clock::{
    api::create_router,
    config::Config,
    services::{BellCue, DisplayPresenter},
    state::AppState,
    tasks::spawn_timer_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("tomato_clock={},tower_http=info", config.log_level()))
        .init();

    let defaults = config.timer_defaults();
    info!("Starting tomato-clock server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, session={}min, break={}min",
        config.host, config.port, defaults.session_length, defaults.break_length
    );

    // Start the task that owns the timer
    let (presenter, display_rx) = DisplayPresenter::new(defaults);
    let timer = spawn_timer_task(defaults, presenter, BellCue::new(config.bell));

    let state = Arc::new(AppState::new(timer, display_rx, config.port, config.host.clone()));
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start-stop          - Start or pause the countdown");
    info!("  POST /reset               - Stop and restore default lengths");
    info!("  POST /session/increment   - Lengthen the session (also /decrement)");
    info!("  POST /break/increment     - Lengthen the break (also /decrement)");
    info!("  GET  /status              - Current clock, mode and lengths");
    info!("  GET  /health              - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        result = shutdown_signal() => {
            match result {
                Ok(()) => info!("Shutdown signal received"),
                Err(e) => tracing::error!("Failed to install signal handler: {}", e),
            }
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
