//! # Ship System Types
//!
//! This module defines the ShipSystem enum naming the parts of the ship that
//! can be reported as damaged, together with the repair code the repair bay
//! displays for each of them.

use serde::{Deserialize, Serialize};

/// Represents a ship system that can be reported as damaged.
///
/// Serialized in snake_case, which is also the form accepted by the
/// `system` query parameter of the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipSystem {
    Navigation,
    Communications,
    LifeSupport,
    Engines,
    DeflectorShield,
}

impl std::fmt::Display for ShipSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ShipSystem::Navigation => "navigation",
            ShipSystem::Communications => "communications",
            ShipSystem::LifeSupport => "life_support",
            ShipSystem::Engines => "engines",
            ShipSystem::DeflectorShield => "deflector_shield",
        };
        write!(f, "{name}")
    }
}

impl ShipSystem {
    /// Every ship system, in declaration order.
    pub const ALL: [ShipSystem; 5] = [
        ShipSystem::Navigation,
        ShipSystem::Communications,
        ShipSystem::LifeSupport,
        ShipSystem::Engines,
        ShipSystem::DeflectorShield,
    ];

    /// Returns the repair code shown in the repair bay for this system.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            ShipSystem::Navigation => "NAV-01",
            ShipSystem::Communications => "COM-02",
            ShipSystem::LifeSupport => "LIFE-03",
            ShipSystem::Engines => "ENG-04",
            ShipSystem::DeflectorShield => "SHLD-05",
        }
    }
}
