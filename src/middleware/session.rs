use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::Response,
};
use tracing::{debug, trace};

use crate::error::{AppError, AppResult};
use crate::models::{AppState, Session, SessionData};
use crate::utils::constant::SESSION_COOKIE_NAME;

/// Session middleware backing every session-aware route
///
/// # Flow
///
/// 1. Reads the `session` cookie and verifies it with the session service
/// 2. Inserts a [`Session`] handle into request extensions
/// 3. Runs the handler
/// 4. If the handler modified the session, appends a `Set-Cookie` header
///    with the re-signed payload
///
/// Missing, tampered, or expired cookies never fail the request; they just
/// start an empty session.
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> AppResult<Response> {
    let data = match session_cookie(req.headers()) {
        Some(token) => state
            .session_service
            .decode(&token)
            .unwrap_or_else(|e| {
                debug!(error = %e, "Discarding unusable session cookie");
                SessionData::default()
            }),
        None => SessionData::default(),
    };

    let session = Session::new(data);
    req.extensions_mut().insert(session.clone());

    let mut response = next.run(req).await;

    let Some(data) = session.modified_data() else {
        return Ok(response);
    };

    let token = state.session_service.encode(&data)?;
    trace!("Issuing session cookie");
    let set_cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        state.session_service.max_age().as_secs()
    );

    let value = HeaderValue::from_str(&set_cookie).map_err(|_| AppError::Internal)?;
    response.headers_mut().append(header::SET_COOKIE, value);

    Ok(response)
}

/// Extracts the session cookie value from any `Cookie` header on the request.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE_NAME)
        .map(|(_, value)| value.trim_matches('"').to_string())
}
