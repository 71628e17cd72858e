//! # Application Constants
//!
//! This module defines configuration constants used throughout the repair bay service.
//! These constants control session cookie behaviour and server defaults.

use std::time::Duration;

/// Name of the cookie carrying the signed session payload
pub const SESSION_COOKIE_NAME: &str = "session";

/// Lifetime of a session cookie
///
/// Both the cookie `Max-Age` and the `exp` claim of the signed payload
/// use this duration, so an expired cookie that a client keeps sending
/// is still rejected server-side.
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(14 * 24 * 60 * 60); // 14 days

/// Address the server binds to when `BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "repair_bay=info,tower_http=info";
