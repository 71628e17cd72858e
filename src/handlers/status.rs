//! # Status Handler
//!
//! Records which ship system is damaged in the caller's session, so the
//! repair bay can later show the matching repair code.

use axum::{
    Json,
    extract::{Extension, Query, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::models::{Session, ShipSystem};

/// Query parameters for the status endpoint
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub system: ShipSystem,
}

/// Acknowledgement returned after a damaged system is reported
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub damaged_system: String,
}

/// Reports a damaged ship system.
///
/// GET /status?system={system}
///
/// Stores the system in the session, overwriting any earlier report.
///
/// # Returns
///
/// - `200 OK` with [`StatusResponse`] - System recorded
/// - `400 Bad Request` - Missing or unknown `system`
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn status(
    Extension(session): Extension<Session>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Query(StatusQuery { system }) = query.map_err(|e| {
        warn!(error = %e, "Rejected status query");
        AppError::BadRequest("Unknown or missing ship system")
    })?;

    session.set_damaged_system(system);
    info!(%system, "Damaged system reported");

    Ok(Json(StatusResponse {
        damaged_system: format!("{system} idenfied, please wait for help."),
    }))
}
