//! # Repair Bay - Ship Maintenance Demo Service
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the public endpoints
//! - [`middleware`] - Session loading and persistence
//! - [`models`] - Ship systems, sessions, phase diagram types and shared state
//! - [`services`] - Phase diagram calculator and session signing
//! - [`telemetry`] - Tracing subscriber setup
//! - [`utils`] - Constants, HTML rendering, secrets and validators

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::StartupError;
use crate::handlers::{health_check, phase_change_diagram, repair_bay, status, teapot};
use crate::middleware::session_middleware;
use crate::models::AppState;
use crate::services::session::SessionService;
use crate::utils::secret::get_secret;

/// Creates the Axum router, reading the session secret from the environment.
///
/// # Environment Variables
///
/// - `SESSION_SECRET_FILE` - Path to a file holding the session signing secret
/// - `SESSION_SECRET` - The secret itself, used when no file is configured
///
/// # Errors
///
/// Returns [`StartupError::MissingSessionSecret`] if neither is usable.
pub fn app() -> Result<Router, StartupError> {
    let secret = get_secret("SESSION_SECRET_FILE", "SESSION_SECRET")
        .ok_or(StartupError::MissingSessionSecret)?;
    Ok(app_with_session_secret(secret.as_bytes()))
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `session_secret` - Key used to sign and verify session cookies
pub fn app_with_session_secret(session_secret: &[u8]) -> Router {
    let state = Arc::new(AppState::new(SessionService::new(session_secret)));

    let session_routes = Router::new()
        .route("/status", get(status))
        .route("/repair-bay", get(repair_bay))
        .route_layer(from_fn_with_state(Arc::clone(&state), session_middleware));

    let public_routes = Router::new()
        .route("/health-check", get(health_check))
        .route("/teapot", post(teapot))
        .route("/phase-change-diagram/", get(phase_change_diagram))
        .route("/phase-change-diagram", get(phase_change_diagram));

    info!("Router configured");

    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
