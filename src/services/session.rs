//! # Session Service
//!
//! This module signs and verifies the session payload carried in the
//! `session` cookie. The payload is an HS256 JWT, so the client can read
//! but not forge it, and it expires together with the cookie.
//!
//! A cookie that fails verification is reported as an error here; the
//! session middleware decides to treat it as an empty session.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::models::{SessionData, ShipSystem};
use crate::utils::constant::SESSION_MAX_AGE;

/// Errors that can occur while signing or verifying a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session encoding failed: {0}")]
    EncodingError(#[from] jsonwebtoken::errors::Error),
    #[error("Invalid session token")]
    InvalidToken,
    #[error("Session expired")]
    Expired,
}

/// Claims stored in the session cookie
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Last system reported through the status endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damaged_system: Option<ShipSystem>,
    /// Expiration timestamp (Unix epoch)
    pub exp: u64,
    /// Issued at timestamp (Unix epoch)
    pub iat: u64,
}

/// Service for signing and verifying session cookies
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    max_age: Duration,
}

impl SessionService {
    /// Creates a session service signing with `secret` and the default lifetime.
    pub fn new(secret: &[u8]) -> Self {
        Self::with_max_age(secret, SESSION_MAX_AGE)
    }

    pub fn with_max_age(secret: &[u8], max_age: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            max_age,
        }
    }

    /// Lifetime of issued sessions, used for the cookie `Max-Age` too.
    #[inline]
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Signs `data` into a token suitable for the session cookie.
    #[instrument(skip_all)]
    pub fn encode(&self, data: &SessionData) -> Result<String, SessionError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = SessionClaims {
            damaged_system: data.damaged_system,
            exp: now + self.max_age.as_secs(),
            iat: now,
        };
        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        trace!("Session token signed");
        Ok(token)
    }

    /// Verifies a session token and returns the data it carries.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Expired`] - Token is past its `exp`
    /// - [`SessionError::InvalidToken`] - Token is malformed, has a bad
    ///   signature, or carries an unknown ship system
    #[instrument(skip_all, fields(token_length = token.len()))]
    pub fn decode(&self, token: &str) -> Result<SessionData, SessionError> {
        match decode::<SessionClaims>(token, &self.decoding_key, &Validation::default()) {
            Ok(token_data) => {
                trace!("Session token verified");
                Ok(SessionData {
                    damaged_system: token_data.claims.damaged_system,
                })
            }
            Err(e) if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                debug!("Session token expired");
                Err(SessionError::Expired)
            }
            Err(e) => {
                debug!(error = %e, "Invalid session token");
                Err(SessionError::InvalidToken)
            }
        }
    }
}
