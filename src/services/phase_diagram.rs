//! # Phase Diagram Service
//!
//! Linear interpolation of temperature and specific volumes between the
//! normal and critical reference points. Pressures outside the reference
//! range clamp to the nearest endpoint instead of extrapolating.

use tracing::{instrument, trace};

use crate::models::{
    ALERT_MESSAGE, ALERT_TEMPERATURE, CRITICAL_POINT, NORMAL_POINT, PhaseDiagramResult,
    ReferencePoint, SAFE_MESSAGE,
};

/// Where a pressure falls relative to the reference range.
enum Segment {
    BelowNormal,
    AboveCritical,
    Within,
}

/// Stateless calculator over two fixed reference points.
#[derive(Debug, Clone, Copy)]
pub struct PhaseDiagram {
    low: ReferencePoint,
    high: ReferencePoint,
}

impl Default for PhaseDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseDiagram {
    pub const fn new() -> Self {
        Self {
            low: NORMAL_POINT,
            high: CRITICAL_POINT,
        }
    }

    /// Computes the phase diagram values for `pressure` (MPa).
    ///
    /// Total over finite inputs; the two reference pressures are distinct
    /// so the interpolation never divides by zero.
    #[instrument(level = "trace", skip(self))]
    pub fn at(&self, pressure: f64) -> PhaseDiagramResult {
        let temperature = self.property(pressure, |p| p.temperature);
        let specific_volume_liquid = self.property(pressure, |p| p.specific_volume_liquid);
        let specific_volume_vapor = self.property(pressure, |p| p.specific_volume_vapor);

        let wall_e_alert = temperature > ALERT_TEMPERATURE;
        let message = if wall_e_alert {
            ALERT_MESSAGE
        } else {
            SAFE_MESSAGE
        };

        trace!(temperature, wall_e_alert, "Phase diagram evaluated");

        PhaseDiagramResult {
            specific_volume_liquid,
            specific_volume_vapor,
            temperature,
            wall_e_alert,
            message: message.to_string(),
        }
    }

    fn segment(&self, pressure: f64) -> Segment {
        if pressure < self.low.pressure {
            Segment::BelowNormal
        } else if pressure > self.high.pressure {
            Segment::AboveCritical
        } else {
            Segment::Within
        }
    }

    fn property(&self, pressure: f64, select: impl Fn(&ReferencePoint) -> f64) -> f64 {
        match self.segment(pressure) {
            Segment::BelowNormal => select(&self.low),
            Segment::AboveCritical => select(&self.high),
            // Endpoints return the constants verbatim so rounding in the
            // formula cannot drift from the reference values.
            Segment::Within if pressure == self.low.pressure => select(&self.low),
            Segment::Within if pressure == self.high.pressure => select(&self.high),
            Segment::Within => linear_interpolate(
                pressure,
                self.low.pressure,
                select(&self.low),
                self.high.pressure,
                select(&self.high),
            ),
        }
    }
}

#[inline]
fn linear_interpolate(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    y1 + (y2 - y1) * (x - x1) / (x2 - x1)
}
