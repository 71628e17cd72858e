//! # Health Check Handler
//!
//! Simple health check endpoint for monitoring application availability.
//! Load balancers and the integration tests poll it to know the server is up.

use axum::http::StatusCode;
use tracing::{debug, instrument};

/// Health check endpoint that returns 200 OK with an empty body.
#[instrument]
pub async fn health_check() -> StatusCode {
    debug!("Health check endpoint accessed");
    StatusCode::OK
}
