//! # Motor Specification
//!
//! The immutable input record for one sizing calculation.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "load_capacity_ton": 50.0,
//!   "operating_speed_rpm": 1800.0,
//!   "drum_radius_m": 1.2,
//!   "system_efficiency": 0.85,
//!   "safety_factor": 1.2,
//!   "load_inertia_kgm2": 4250.0,
//!   "motor_inertia_kgm2": 125.0,
//!   "environment": "OFFSHORE",
//!   "classification": "DNV"
//! }
//! ```

use log::error;
use serde::{Deserialize, Serialize};

use crate::errors::{SizingError, SizingResult};
use crate::marine::{ClassificationSociety, MarineEnvironment};

/// Largest drum radius accepted as physically plausible (m)
pub const MAX_DRUM_RADIUS_M: f64 = 5.0;

/// Finite and strictly positive
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Input parameters for a winch/hoist motor.
///
/// Numeric bounds are checked by [`MotorSpecification::validate`], which
/// [`crate::calculator::MotorSizingCalculator::new`] calls before accepting
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorSpecification {
    /// Rated load in metric tonnes (> 0)
    pub load_capacity_ton: f64,

    /// Motor operating speed in rpm (> 0)
    pub operating_speed_rpm: f64,

    /// Winch drum radius in metres (0 < r ≤ 5)
    pub drum_radius_m: f64,

    /// Overall drivetrain efficiency (0 < η ≤ 1)
    pub system_efficiency: f64,

    /// Additional design safety factor (> 1)
    pub safety_factor: f64,

    /// Load-side moment of inertia in kg·m² (> 0)
    pub load_inertia_kgm2: f64,

    /// Motor rotor moment of inertia in kg·m² (> 0)
    pub motor_inertia_kgm2: f64,

    /// Marine operating regime
    pub environment: MarineEnvironment,

    /// Governing classification society
    pub classification: ClassificationSociety,
}

impl MotorSpecification {
    /// Validate every numeric field against its bounds.
    ///
    /// Checks run in a fixed order and the first violation is returned.
    /// NaN and ±∞ fail every check.
    pub fn validate(&self) -> SizingResult<()> {
        let checks: [(bool, &str, f64, &str); 8] = [
            (
                positive(self.load_capacity_ton),
                "load_capacity_ton",
                self.load_capacity_ton,
                "Load capacity must be positive and finite",
            ),
            (
                positive(self.operating_speed_rpm),
                "operating_speed_rpm",
                self.operating_speed_rpm,
                "Operating speed must be positive and finite",
            ),
            (
                self.drum_radius_m > 0.0,
                "drum_radius_m",
                self.drum_radius_m,
                "Drum radius must be positive",
            ),
            (
                self.system_efficiency > 0.0 && self.system_efficiency <= 1.0,
                "system_efficiency",
                self.system_efficiency,
                "System efficiency must be in (0, 1]",
            ),
            (
                self.safety_factor > 1.0 && self.safety_factor.is_finite(),
                "safety_factor",
                self.safety_factor,
                "Safety factor must be finite and greater than 1",
            ),
            (
                positive(self.load_inertia_kgm2),
                "load_inertia_kgm2",
                self.load_inertia_kgm2,
                "Load inertia must be positive and finite",
            ),
            (
                positive(self.motor_inertia_kgm2),
                "motor_inertia_kgm2",
                self.motor_inertia_kgm2,
                "Motor inertia must be positive and finite",
            ),
            (
                self.drum_radius_m <= MAX_DRUM_RADIUS_M,
                "drum_radius_m",
                self.drum_radius_m,
                "Drum radius is implausibly large (over 5 m)",
            ),
        ];

        for (ok, field, value, reason) in checks {
            if !ok {
                error!("Specification rejected: {field} = {value} ({reason})");
                return Err(SizingError::invalid_input(field, value.to_string(), reason));
            }
        }
        Ok(())
    }

    /// Ratio of load inertia to motor inertia
    pub fn inertia_ratio(&self) -> f64 {
        self.load_inertia_kgm2 / self.motor_inertia_kgm2
    }

    /// Copy of this specification in a different operating environment
    pub fn with_environment(&self, environment: MarineEnvironment) -> Self {
        Self {
            environment,
            ..self.clone()
        }
    }

    /// 50 t container-ship winch used in examples and tests.
    pub fn container_ship_winch() -> Self {
        Self {
            load_capacity_ton: 50.0,
            operating_speed_rpm: 1800.0,
            drum_radius_m: 1.2,
            system_efficiency: 0.85,
            safety_factor: 1.2,
            load_inertia_kgm2: 4250.0,
            motor_inertia_kgm2: 125.0,
            environment: MarineEnvironment::Offshore,
            classification: ClassificationSociety::Dnv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rejects(spec: MotorSpecification, expected_field: &str) {
        match spec.validate() {
            Err(SizingError::InvalidInput { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected InvalidInput for {expected_field}, got {other:?}"),
        }
    }

    #[test]
    fn test_reference_spec_is_valid() {
        assert!(MotorSpecification::container_ship_winch().validate().is_ok());
    }

    #[test]
    fn test_non_positive_fields_rejected() {
        let base = MotorSpecification::container_ship_winch();

        assert_rejects(MotorSpecification { load_capacity_ton: 0.0, ..base.clone() }, "load_capacity_ton");
        assert_rejects(MotorSpecification { operating_speed_rpm: -10.0, ..base.clone() }, "operating_speed_rpm");
        assert_rejects(MotorSpecification { drum_radius_m: 0.0, ..base.clone() }, "drum_radius_m");
        assert_rejects(MotorSpecification { load_inertia_kgm2: 0.0, ..base.clone() }, "load_inertia_kgm2");
        assert_rejects(MotorSpecification { motor_inertia_kgm2: -1.0, ..base }, "motor_inertia_kgm2");
    }

    #[test]
    fn test_efficiency_bounds() {
        let base = MotorSpecification::container_ship_winch();
        assert_rejects(MotorSpecification { system_efficiency: 0.0, ..base.clone() }, "system_efficiency");
        assert_rejects(MotorSpecification { system_efficiency: 1.01, ..base.clone() }, "system_efficiency");
        assert!(MotorSpecification { system_efficiency: 1.0, ..base }.validate().is_ok());
    }

    #[test]
    fn test_safety_factor_must_exceed_one() {
        let base = MotorSpecification::container_ship_winch();
        assert_rejects(MotorSpecification { safety_factor: 1.0, ..base }, "safety_factor");
    }

    #[test]
    fn test_implausible_drum_radius() {
        let base = MotorSpecification::container_ship_winch();
        assert!(MotorSpecification { drum_radius_m: 5.0, ..base.clone() }.validate().is_ok());

        let err = MotorSpecification { drum_radius_m: 12.0, ..base }.validate().unwrap_err();
        assert!(err.to_string().contains("implausibly large"));
    }

    #[test]
    fn test_nan_rejected() {
        let base = MotorSpecification::container_ship_winch();
        assert_rejects(MotorSpecification { load_capacity_ton: f64::NAN, ..base.clone() }, "load_capacity_ton");
        assert_rejects(MotorSpecification { drum_radius_m: f64::NAN, ..base }, "drum_radius_m");
    }

    #[test]
    fn test_infinite_rejected() {
        let base = MotorSpecification::container_ship_winch();
        assert_rejects(MotorSpecification { load_capacity_ton: f64::INFINITY, ..base.clone() }, "load_capacity_ton");
        assert_rejects(MotorSpecification { operating_speed_rpm: f64::INFINITY, ..base.clone() }, "operating_speed_rpm");
        assert_rejects(MotorSpecification { safety_factor: f64::INFINITY, ..base.clone() }, "safety_factor");
        assert_rejects(MotorSpecification { load_inertia_kgm2: f64::INFINITY, ..base.clone() }, "load_inertia_kgm2");
        assert_rejects(MotorSpecification { motor_inertia_kgm2: f64::INFINITY, ..base.clone() }, "motor_inertia_kgm2");
        assert_rejects(MotorSpecification { drum_radius_m: f64::INFINITY, ..base.clone() }, "drum_radius_m");
        assert_rejects(MotorSpecification { system_efficiency: f64::NEG_INFINITY, ..base }, "system_efficiency");
    }

    #[test]
    fn test_first_violation_reported() {
        let spec = MotorSpecification {
            load_capacity_ton: -1.0,
            safety_factor: 0.5,
            ..MotorSpecification::container_ship_winch()
        };
        assert_rejects(spec, "load_capacity_ton");
    }

    #[test]
    fn test_serialization() {
        let spec = MotorSpecification::container_ship_winch();
        let json = serde_json::to_string_pretty(&spec).unwrap();
        assert!(json.contains("\"OFFSHORE\""));
        assert!(json.contains("\"DNV\""));
        let roundtrip: MotorSpecification = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, roundtrip);
    }
}
