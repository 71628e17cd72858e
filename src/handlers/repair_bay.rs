//! # Repair Bay Handler
//!
//! Renders the repair bay page for whichever system the caller last reported
//! through the status endpoint.

use axum::{extract::Extension, response::Html};
use tracing::{debug, instrument};

use crate::models::Session;
use crate::utils::html::{REPAIR_BAY_REFERRAL, render_repair_bay_html};

/// Shows the repair code for the damaged system stored in the session.
///
/// GET /repair-bay
///
/// # Returns
///
/// Always `200 OK` with `text/html`: either the repair page with the
/// system's code in an `anchor-point` element, or a referral to the status
/// service when nothing has been reported yet.
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn repair_bay(Extension(session): Extension<Session>) -> Html<String> {
    match session.damaged_system() {
        Some(system) => {
            debug!(%system, code = system.code(), "Rendering repair bay");
            Html(render_repair_bay_html(system.code()))
        }
        None => {
            debug!("No damaged system in session");
            Html(REPAIR_BAY_REFERRAL.to_string())
        }
    }
}
