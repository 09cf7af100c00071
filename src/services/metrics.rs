//! Derived mission metrics: cost, mass and volume aggregates.
//!
//! Everything here is a pure function of a [`Layout`] snapshot. Nothing is
//! cached; callers recompute after every edit.

use serde::Serialize;

use crate::models::Layout;
use crate::services::compliance::ComplianceReport;
use crate::services::logistics::LogisticsEstimate;

/// Fixed mission constants.
pub mod constants {
    /// Structural mass present even with no modules placed (kg).
    pub const BASE_STRUCTURAL_MASS_KG: f64 = 10_000.0;
    /// Launch price per kilogram, in currency units.
    pub const LAUNCH_COST_PER_KG: f64 = 75_000.0;
    /// Currency units per reported million.
    pub const UNITS_PER_MILLION: f64 = 1_000_000.0;
}

/// Cost, mass and volume aggregates over a layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MissionMetrics {
    /// Number of placed modules
    pub module_count: usize,
    /// Sum of module costs (millions)
    pub hardware_cost: f64,
    /// Base structural mass plus module masses (kg)
    pub total_mass: f64,
    /// `total_mass * LAUNCH_COST_PER_KG`, in millions
    pub launch_cost: f64,
    /// Hardware plus launch cost (millions)
    pub total_cost: f64,
    /// Sum of module volumes (m³)
    pub total_volume: f64,
}

impl MissionMetrics {
    /// Computes the aggregates for `layout`.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let modules = layout.modules();
        let hardware_cost: f64 = modules.iter().map(|m| m.cost).sum();
        let module_mass: f64 = modules.iter().map(|m| m.mass).sum();
        let total_volume: f64 = modules.iter().map(|m| m.volume).sum();

        let total_mass = constants::BASE_STRUCTURAL_MASS_KG + module_mass;
        let launch_cost = launch_cost(total_mass);

        Self {
            module_count: modules.len(),
            hardware_cost,
            total_mass,
            launch_cost,
            total_cost: hardware_cost + launch_cost,
            total_volume,
        }
    }
}

/// Launch cost in millions for a given mass in kilograms.
#[must_use]
pub fn launch_cost(total_mass_kg: f64) -> f64 {
    total_mass_kg * constants::LAUNCH_COST_PER_KG / constants::UNITS_PER_MILLION
}

/// Every derived figure for one layout snapshot, ready for display panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionReport {
    /// Cost, mass and volume aggregates
    pub metrics: MissionMetrics,
    /// Radiation, structural and NHV checks
    pub compliance: ComplianceReport,
    /// Launch logistics estimate
    pub logistics: LogisticsEstimate,
}

impl MissionReport {
    /// Computes the full report for `layout`.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let metrics = MissionMetrics::from_layout(layout);
        Self {
            compliance: ComplianceReport::evaluate(&metrics),
            logistics: LogisticsEstimate::for_dry_mass(metrics.total_mass),
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Module, ModuleType, Vec3};

    fn dorm_and_eclss() -> Layout {
        Layout::from_modules(vec![
            Module::new(ModuleType::Dormitory),
            Module::new(ModuleType::LifeSupport).at(Vec3::new(10.0, 0.0, 0.0)),
        ])
    }

    #[test]
    fn test_empty_layout_metrics() {
        let metrics = MissionMetrics::from_layout(&Layout::new());
        assert_eq!(metrics.module_count, 0);
        assert_eq!(metrics.hardware_cost, 0.0);
        assert_eq!(metrics.total_mass, constants::BASE_STRUCTURAL_MASS_KG);
        assert_eq!(metrics.total_volume, 0.0);
        assert_eq!(metrics.launch_cost, 750.0);
        assert_eq!(metrics.total_cost, 750.0);
    }

    #[test]
    fn test_dormitory_and_eclss_scenario() {
        let metrics = MissionMetrics::from_layout(&dorm_and_eclss());
        assert_eq!(metrics.module_count, 2);
        assert_eq!(metrics.hardware_cost, 195.0);
        assert_eq!(
            metrics.total_mass,
            constants::BASE_STRUCTURAL_MASS_KG + 20_000.0
        );
        assert_eq!(metrics.total_volume, 200.0);
        // 30 000 kg * 75 000 / 1e6
        assert_eq!(metrics.launch_cost, 2250.0);
        assert_eq!(metrics.total_cost, 2445.0);
    }

    #[test]
    fn test_metrics_follow_scale() {
        let mut module = Module::new(ModuleType::Storage);
        module.set_scale(2.0);
        let metrics = MissionMetrics::from_layout(&Layout::from_modules(vec![module]));
        assert_eq!(metrics.hardware_cost, 200.0);
        assert_eq!(metrics.total_volume, 720.0);
        assert_eq!(metrics.total_mass, 10_000.0 + 40_000.0);
    }

    #[test]
    fn test_report_bundles_all_sections() {
        let report = MissionReport::from_layout(&dorm_and_eclss());
        assert_eq!(report.metrics.total_mass, 30_000.0);
        assert!(report.compliance.nhv.passed);
        assert_eq!(report.logistics.dry_mass, 30_000.0);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["metrics"].is_object());
        assert!(json["compliance"]["radiation"].is_object());
        assert!(json["logistics"]["launch_windows"].is_array());
    }
}
