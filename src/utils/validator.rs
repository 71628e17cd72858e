//! # Numeric Input Validation Utilities
//!
//! Custom validators plugged into `validator` derives on request payloads.

use validator::ValidationError;

/// Rejects NaN and infinities.
///
/// `f64` query parameters happily parse `"NaN"` and `"inf"`, neither of which
/// means anything as a pressure, so they are turned away at the boundary.
pub fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}
