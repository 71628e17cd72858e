//! # Phase Change Diagram Handler
//!
//! Exposes the phase diagram calculator over HTTP. Input is validated here;
//! the calculator itself accepts any finite pressure.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{AppState, PhaseDiagramResult};
use crate::utils::validator::validate_finite;

/// Query parameters for the phase change diagram
#[derive(Debug, Deserialize, Validate)]
pub struct PhaseChangeQuery {
    /// Pressure in MPa
    #[validate(custom(function = "validate_finite"))]
    pub pressure: f64,
}

/// Computes temperature and specific volumes at a given pressure.
///
/// GET /phase-change-diagram/?pressure={MPa}
///
/// # Returns
///
/// - `200 OK` with [`PhaseDiagramResult`]
/// - `400 Bad Request` - Missing, non-numeric, or non-finite pressure
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn phase_change_diagram(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PhaseChangeQuery>, QueryRejection>,
) -> AppResult<Json<PhaseDiagramResult>> {
    let Query(params) = query.map_err(|e| {
        warn!(error = %e, "Rejected phase change query");
        AppError::BadRequest("Pressure must be a number")
    })?;

    if params.validate().is_err() {
        warn!(pressure = params.pressure, "Non-finite pressure provided");
        return Err(AppError::BadRequest("Pressure must be finite"));
    }

    let result = state.phase_diagram.at(params.pressure);
    debug!(
        pressure = params.pressure,
        temperature = result.temperature,
        wall_e_alert = result.wall_e_alert,
        "Phase diagram computed"
    );

    Ok(Json(result))
}
