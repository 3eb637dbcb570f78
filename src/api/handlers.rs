//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, Direction, Mode, TimerState};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

fn respond(
    state: &AppState,
    action: &str,
    result: Result<TimerState, String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(timer) => {
            state.record_action(action);
            let message = format!("{} {} at {}", timer.mode.label(), action, timer.clock_text());
            Ok(Json(ApiResponse::new(message, timer, state.display())))
        }
        Err(e) => {
            error!("Failed to apply {}: {}", action, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /start-stop - Toggle the countdown
pub async fn start_stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.timer.start_or_pause().await;
    info!("Start/stop endpoint called");
    respond(&state, "start-stop", result)
}

/// Handle POST /reset - Stop and restore defaults
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.timer.reset().await;
    info!("Reset endpoint called");
    respond(&state, "reset", result)
}

/// Handle POST /:target/:direction - Step a session or break length
pub async fn adjust_length_handler(
    State(state): State<Arc<AppState>>,
    Path((target, direction)): Path<(Mode, Direction)>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let result = state.timer.adjust_length(target, direction).await;
    info!("Adjust endpoint called: {:?} {:?}", target, direction);
    let action = match (target, direction) {
        (Mode::Session, Direction::Increment) => "session-increment",
        (Mode::Session, Direction::Decrement) => "session-decrement",
        (Mode::Break, Direction::Increment) => "break-increment",
        (Mode::Break, Direction::Decrement) => "break-decrement",
    };
    respond(&state, action, result)
}

/// Handle GET /status - Return current timer status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.timer.snapshot().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer state: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        display: state.display(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
