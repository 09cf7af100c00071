//! Launch logistics estimate: propellant, mass split, vehicle and windows.

use serde::Serialize;
use std::fmt;

/// Fixed logistics ratios.
pub mod ratios {
    /// Propellant mass per kilogram of dry mass.
    pub const PROPELLANT_RATIO: f64 = 4.0;
    /// Share of dry mass that is structure.
    pub const STRUCTURE_FRACTION: f64 = 0.6;
    /// Share of dry mass that is payload.
    pub const PAYLOAD_FRACTION: f64 = 0.4;
    /// Dry mass above which the heavy-lift vehicle is required (kg).
    pub const HEAVY_LIFT_THRESHOLD_KG: f64 = 50_000.0;
}

/// The two fixed launch window labels.
pub const LAUNCH_WINDOWS: [&str; 2] = [
    "2028-07 (Mars transfer window)",
    "2030-09 (Mars transfer window)",
];

/// Launch vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchVehicle {
    /// Standard heavy launcher
    FalconHeavy,
    /// Super-heavy launcher
    SlsBlock2,
}

impl LaunchVehicle {
    /// Picks the vehicle for a dry mass. Strictly above the threshold needs
    /// heavy lift.
    #[must_use]
    pub fn for_mass(total_mass: f64) -> Self {
        if total_mass > ratios::HEAVY_LIFT_THRESHOLD_KG {
            Self::SlsBlock2
        } else {
            Self::FalconHeavy
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FalconHeavy => "Falcon Heavy",
            Self::SlsBlock2 => "SLS Block 2",
        }
    }
}

impl fmt::Display for LaunchVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Logistics figures derived from the dry (total) mass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogisticsEstimate {
    /// Dry mass (kg)
    pub dry_mass: f64,
    /// Propellant needed (kg)
    pub propellant_mass: f64,
    /// Dry plus propellant (kg)
    pub total_delivery_mass: f64,
    /// Structural share of dry mass (kg)
    pub structure_mass: f64,
    /// Payload share of dry mass (kg)
    pub payload_mass: f64,
    /// Selected vehicle
    pub vehicle: LaunchVehicle,
    /// Human-readable vehicle label
    pub vehicle_label: &'static str,
    /// Fixed launch window labels
    pub launch_windows: [&'static str; 2],
}

impl LogisticsEstimate {
    /// Computes the estimate for a dry mass in kilograms.
    #[must_use]
    pub fn for_dry_mass(dry_mass: f64) -> Self {
        let propellant_mass = dry_mass * ratios::PROPELLANT_RATIO;
        let vehicle = LaunchVehicle::for_mass(dry_mass);
        Self {
            dry_mass,
            propellant_mass,
            total_delivery_mass: dry_mass + propellant_mass,
            structure_mass: dry_mass * ratios::STRUCTURE_FRACTION,
            payload_mass: dry_mass * ratios::PAYLOAD_FRACTION,
            vehicle,
            vehicle_label: vehicle.label(),
            launch_windows: LAUNCH_WINDOWS,
        }
    }
}
