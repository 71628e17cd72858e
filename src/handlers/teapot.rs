use axum::http::StatusCode;
use tracing::{debug, instrument};

/// POST /teapot
///
/// Refuses to brew coffee.
#[instrument]
pub async fn teapot() -> StatusCode {
    debug!("Teapot endpoint accessed");
    StatusCode::IM_A_TEAPOT
}
