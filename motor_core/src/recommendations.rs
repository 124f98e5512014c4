//! # Design Recommendations
//!
//! Turns a [`CalculationResult`] into purchasing guidance: motor and gearbox
//! capacities with margin, a catalogue motor rating, and an inertia-ratio
//! check. Also compares one specification across operating environments.

use serde::{Deserialize, Serialize};

use crate::calculator::{CalculationResult, MotorSizingCalculator, MAX_INERTIA_MISMATCH};
use crate::catalogue::standard_rating_for;
use crate::errors::SizingResult;
use crate::marine::MarineEnvironment;
use crate::specification::MotorSpecification;

/// Margin on motor power over the calculated requirement
pub const MOTOR_POWER_MARGIN: f64 = 1.10;

/// Margin on gearbox torque capacity over the required torque
pub const GEARBOX_TORQUE_MARGIN: f64 = 1.20;

/// Design guidance derived from one sizing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRecommendations {
    /// Minimum motor rating: power requirement plus 10 % (kW)
    pub min_motor_power_kw: f64,

    /// Smallest standard rating covering `min_motor_power_kw`, if any (kW)
    pub recommended_standard_power_kw: Option<f64>,

    /// Minimum gearbox torque capacity: required torque plus 20 % (N·m)
    pub min_gearbox_torque_nm: f64,

    /// Load-to-motor inertia ratio
    pub inertia_ratio: f64,

    /// Largest recommended inertia ratio
    pub recommended_max_inertia_ratio: f64,

    /// True if `inertia_ratio` is within the recommended limit
    pub inertia_ratio_ok: bool,
}

impl DesignRecommendations {
    /// Derive recommendations for `spec` from its calculation result
    pub fn from_result(spec: &MotorSpecification, result: &CalculationResult) -> Self {
        let min_motor_power_kw = result.motor_power_kw * MOTOR_POWER_MARGIN;
        let inertia_ratio = spec.inertia_ratio();

        Self {
            min_motor_power_kw,
            recommended_standard_power_kw: standard_rating_for(min_motor_power_kw),
            min_gearbox_torque_nm: result.required_torque_nm * GEARBOX_TORQUE_MARGIN,
            inertia_ratio,
            recommended_max_inertia_ratio: MAX_INERTIA_MISMATCH,
            inertia_ratio_ok: inertia_ratio <= MAX_INERTIA_MISMATCH,
        }
    }
}

/// Result of sizing one specification in one environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentComparison {
    pub environment: MarineEnvironment,
    pub result: CalculationResult,
}

/// Size `spec` in each of `environments`, without a duty cycle.
///
/// The specification's own environment is ignored. The first failing
/// calculation aborts the comparison.
pub fn compare_environments(
    spec: &MotorSpecification,
    environments: &[MarineEnvironment],
) -> SizingResult<Vec<EnvironmentComparison>> {
    environments
        .iter()
        .map(|&environment| {
            let calculator = MotorSizingCalculator::new(spec.with_environment(environment))?;
            Ok(EnvironmentComparison {
                environment,
                result: calculator.perform_calculation()?,
            })
        })
        .collect()
}
