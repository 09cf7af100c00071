//! Illustrative compliance checks over mission aggregates.
//!
//! The formulas are placeholders with fixed thresholds, not physical models.

use serde::Serialize;

use crate::services::metrics::MissionMetrics;

/// Fixed thresholds.
pub mod thresholds {
    /// Minimum radiation shielding score.
    pub const RADIATION_MIN_SCORE: f64 = 200.0;
    /// Shielding points per placed module.
    pub const RADIATION_POINTS_PER_MODULE: f64 = 15.0;
    /// Maximum structural pressure.
    pub const STRUCTURAL_MAX_PRESSURE: f64 = 350.0;
    /// Load factor applied to mass / 100.
    pub const STRUCTURAL_LOAD_FACTOR: f64 = 1.5;
    /// Net habitable volume for a 4-crew long-duration mission (m³).
    pub const NHV_REQUIREMENT_M3: f64 = 115.83;
}

/// A single pass/fail check with the value it was judged on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Check {
    /// Computed value (score, pressure or volume)
    pub value: f64,
    /// Threshold the value was compared against
    pub threshold: f64,
    /// Whether the check passed
    pub passed: bool,
}

/// Radiation shielding: `count * 15 + mass / 1000`, passes at or above 200.
#[must_use]
pub fn radiation_check(module_count: usize, total_mass: f64) -> Check {
    let score =
        module_count as f64 * thresholds::RADIATION_POINTS_PER_MODULE + total_mass / 1000.0;
    Check {
        value: score,
        threshold: thresholds::RADIATION_MIN_SCORE,
        passed: score >= thresholds::RADIATION_MIN_SCORE,
    }
}

/// Structural load: `(mass / 100) * 1.5`, passes at or below 350.
#[must_use]
pub fn structural_check(total_mass: f64) -> Check {
    let pressure = (total_mass / 100.0) * thresholds::STRUCTURAL_LOAD_FACTOR;
    Check {
        value: pressure,
        threshold: thresholds::STRUCTURAL_MAX_PRESSURE,
        passed: pressure <= thresholds::STRUCTURAL_MAX_PRESSURE,
    }
}

/// Net habitable volume: passes at or above 115.83 m³.
#[must_use]
pub fn nhv_check(total_volume: f64) -> Check {
    Check {
        value: total_volume,
        threshold: thresholds::NHV_REQUIREMENT_M3,
        passed: total_volume >= thresholds::NHV_REQUIREMENT_M3,
    }
}

/// All three checks for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplianceReport {
    /// Radiation shielding score check
    pub radiation: Check,
    /// Structural pressure check
    pub structural: Check,
    /// Net habitable volume check
    pub nhv: Check,
}

impl ComplianceReport {
    /// Evaluates every check from the aggregates.
    #[must_use]
    pub fn evaluate(metrics: &MissionMetrics) -> Self {
        Self {
            radiation: radiation_check(metrics.module_count, metrics.total_mass),
            structural: structural_check(metrics.total_mass),
            nhv: nhv_check(metrics.total_volume),
        }
    }

    /// True when every check passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.radiation.passed && self.structural.passed && self.nhv.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Layout;

    #[test]
    fn test_nhv_boundary() {
        assert!(nhv_check(115.83).passed);
        assert!(!nhv_check(115.82).passed);
        assert!(!nhv_check(0.0).passed);
    }

    #[test]
    fn test_radiation_score() {
        let check = radiation_check(2, 30_000.0);
        assert_eq!(check.value, 60.0);
        assert!(!check.passed);

        // 10 * 15 + 50 = 200 exactly
        assert!(radiation_check(10, 50_000.0).passed);
        assert!(!radiation_check(10, 49_000.0).passed);
    }

    #[test]
    fn test_structural_pressure() {
        let check = structural_check(30_000.0);
        assert_eq!(check.value, 450.0);
        assert!(!check.passed);

        assert!(structural_check(20_000.0).passed);
        assert!(!structural_check(23_400.0).passed);
        assert!(structural_check(10_000.0).passed);
    }

    #[test]
    fn test_empty_layout_is_deterministic() {
        let metrics = MissionMetrics::from_layout(&Layout::new());
        let report = ComplianceReport::evaluate(&metrics);

        assert_eq!(report.radiation.value, 10.0);
        assert!(!report.radiation.passed);
        assert_eq!(report.structural.value, 150.0);
        assert!(report.structural.passed);
        assert_eq!(report.nhv.value, 0.0);
        assert!(!report.nhv.passed);
        assert!(!report.all_passed());
    }
}
