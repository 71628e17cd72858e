//! # Phase Diagram Types
//!
//! Reference points and the per-request result of the phase-change calculator.

use serde::{Deserialize, Serialize};

/// One fixed (pressure, temperature, specific volumes) tuple used as an
/// interpolation endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    /// MPa
    pub pressure: f64,
    /// °C
    pub temperature: f64,
    /// m³/kg
    pub specific_volume_liquid: f64,
    /// m³/kg
    pub specific_volume_vapor: f64,
}

/// Low-pressure end of the diagram.
pub const NORMAL_POINT: ReferencePoint = ReferencePoint {
    pressure: 0.05,
    temperature: 30.0,
    specific_volume_liquid: 0.00105,
    specific_volume_vapor: 30.0,
};

/// High-pressure end of the diagram.
///
/// Liquid and vapor volumes coincide here. These are demonstration values,
/// not steam-table data.
pub const CRITICAL_POINT: ReferencePoint = ReferencePoint {
    pressure: 10.0,
    temperature: 500.0,
    specific_volume_liquid: 0.0035,
    specific_volume_vapor: 0.0035,
};

/// Temperatures strictly above this raise the alert.
pub const ALERT_TEMPERATURE: f64 = 30.0;

pub const ALERT_MESSAGE: &str = "Alert Wall-E! Temperature is above 30°C. Hurry!";
pub const SAFE_MESSAGE: &str = "Temperature is safe, don't worry Wall-E.";

/// Values derived from a single pressure reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseDiagramResult {
    pub specific_volume_liquid: f64,
    pub specific_volume_vapor: f64,
    pub temperature: f64,
    pub wall_e_alert: bool,
    pub message: String,
}
