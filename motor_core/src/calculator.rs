//! # Motor Sizing Calculator
//!
//! Derives torque, power and gear-ratio requirements for a winch motor from
//! a validated [`MotorSpecification`].
//!
//! ## Calculation Pipeline
//!
//! ```text
//! F      = m_load × g                               (load weight, N)
//! T_base = F × r_drum / η                           (drum torque, N·m)
//! T_env  = T_base × k_salinity × k_temp × k_vib     (environmental corrections)
//! T_req  = T_env × SF_class × SF_spec               (safety factors)
//! P      = T_req × ω / 1000,  ω = n × 2π/60         (power, kW)
//! n_opt  = sqrt(J_load / J_motor)                   (optimal gear ratio)
//! n_min  = n_opt / sqrt(10)                         (10:1 inertia mismatch bound)
//! T_rms  = sqrt(Σ T_i² t_i / Σ t_i)                 (optional, duty cycle)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use motor_core::calculator::MotorSizingCalculator;
//! use motor_core::duty_cycle::DutyCycle;
//! use motor_core::specification::MotorSpecification;
//!
//! let calculator = MotorSizingCalculator::new(MotorSpecification::container_ship_winch()).unwrap();
//! let cycle = DutyCycle::new(vec![3.0, 2.0, 1.0], vec![900.0, 600.0, 0.0]);
//!
//! let result = calculator.perform_calculation_with_duty_cycle(&cycle).unwrap();
//! println!("Required torque: {:.0} N·m", result.required_torque_nm);
//! println!("Motor power: {:.1} kW", result.motor_power_kw);
//! assert!(result.rms_torque_nm.is_some());
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::duty_cycle::{self, DutyCycle};
use crate::errors::{SizingError, SizingResult};
use crate::marine::EnvironmentalFactors;
use crate::specification::MotorSpecification;
use crate::units::{Kilograms, Kilowatts, NewtonMeters, Newtons, RadiansPerSecond, Rpm, Tonnes};

/// Inertia mismatch ratio bounding the minimum gear ratio
pub const MAX_INERTIA_MISMATCH: f64 = 10.0;

/// Audit record of the environmental corrections applied to a torque.
///
/// Serializes as a name → factor mapping:
/// `{"salinity": 1.2, "temperature": 1.08, "vibration": 1.1, "total": 1.4256}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionBreakdown {
    pub salinity: f64,
    pub temperature: f64,
    pub vibration: f64,
    /// Product of the three factors
    pub total: f64,
}

impl CorrectionBreakdown {
    /// Factor names paired with their values, in application order
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("salinity", self.salinity),
            ("temperature", self.temperature),
            ("vibration", self.vibration),
            ("total", self.total),
        ]
    }

    /// Look up a factor by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

impl From<EnvironmentalFactors> for CorrectionBreakdown {
    fn from(factors: EnvironmentalFactors) -> Self {
        Self {
            salinity: factors.salinity,
            temperature: factors.temperature,
            vibration: factors.vibration,
            total: factors.total(),
        }
    }
}

/// Results from a comprehensive sizing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Design torque after corrections and all safety factors (N·m)
    pub required_torque_nm: f64,

    /// Motor power at the operating speed for the design torque (kW)
    pub motor_power_kw: f64,

    /// Gear ratio matching reflected load inertia to motor inertia
    pub optimal_gear_ratio: f64,

    /// Smallest gear ratio keeping the inertia mismatch within 10:1
    pub minimum_gear_ratio: f64,

    /// Duty-cycle RMS torque (N·m), present only if a duty cycle was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rms_torque_nm: Option<f64>,

    /// Environmental correction factors that were applied
    pub environmental_corrections: CorrectionBreakdown,

    /// Drum torque from the load before any correction (N·m)
    pub basic_torque_nm: f64,

    /// Torque after environmental corrections, before safety factors (N·m)
    pub corrected_torque_nm: f64,

    /// Safety factor of the governing classification society
    pub classification_safety_factor: f64,
}

/// Motor sizing calculator bound to one validated specification.
///
/// Every method is a pure function of its arguments and the held
/// specification; a calculator can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct MotorSizingCalculator {
    spec: MotorSpecification,
}

impl MotorSizingCalculator {
    /// Validate `spec` and build a calculator for it.
    ///
    /// # Errors
    ///
    /// [`SizingError::InvalidInput`] naming the first field that violates its bounds.
    pub fn new(spec: MotorSpecification) -> SizingResult<Self> {
        spec.validate()?;
        info!(
            "Motor calculator initialised: {} environment, {} classification",
            spec.environment, spec.classification
        );
        Ok(Self { spec })
    }

    /// The specification this calculator was built with
    pub fn specification(&self) -> &MotorSpecification {
        &self.spec
    }

    /// Drum torque required to hold `force_n` newtons: T = F × r / η
    pub fn calculate_basic_torque(&self, force_n: f64) -> SizingResult<f64> {
        if force_n.is_nan() || force_n <= 0.0 {
            return Err(SizingError::domain(
                "calculate_basic_torque",
                format!("force must be positive, got {force_n}"),
            ));
        }
        let torque = force_n * self.spec.drum_radius_m / self.spec.system_efficiency;
        debug!("Basic torque: {torque:.2} N·m for {force_n:.2} N");
        Ok(torque)
    }

    /// Drum torque for a suspended mass in kilograms
    pub fn calculate_torque_from_mass(&self, mass_kg: f64) -> SizingResult<f64> {
        let Newtons(force_n) = Kilograms(mass_kg).weight();
        self.calculate_basic_torque(force_n)
    }

    /// Power in kW to deliver `torque_nm` at the operating speed
    pub fn calculate_power_requirement(&self, torque_nm: f64) -> f64 {
        let omega: RadiansPerSecond = Rpm(self.spec.operating_speed_rpm).into();
        let Kilowatts(power_kw) = (NewtonMeters(torque_nm) * omega).into();
        debug!(
            "Power: {power_kw:.2} kW (torque {torque_nm:.2} N·m at {} rpm)",
            self.spec.operating_speed_rpm
        );
        power_kw
    }

    /// Gear ratio that matches reflected load inertia to motor inertia
    pub fn calculate_optimal_gear_ratio(&self) -> SizingResult<f64> {
        if self.spec.motor_inertia_kgm2.is_nan() || self.spec.motor_inertia_kgm2 <= 0.0 {
            return Err(SizingError::domain(
                "calculate_optimal_gear_ratio",
                "motor inertia must be positive",
            ));
        }
        let ratio = (self.spec.load_inertia_kgm2 / self.spec.motor_inertia_kgm2).sqrt();
        debug!("Optimal gear ratio: {ratio:.2}:1");
        Ok(ratio)
    }

    /// Smallest gear ratio keeping the reflected inertia mismatch within 10:1
    pub fn calculate_minimum_gear_ratio(&self) -> SizingResult<f64> {
        let ratio = self.calculate_optimal_gear_ratio()? / MAX_INERTIA_MISMATCH.sqrt();
        debug!("Minimum gear ratio: {ratio:.2}:1");
        Ok(ratio)
    }

    /// Apply salinity, temperature and vibration factors in turn.
    ///
    /// Returns the corrected torque and the factors that were applied.
    pub fn apply_environmental_corrections(&self, base_torque: f64) -> (f64, CorrectionBreakdown) {
        let factors = self.spec.environment.correction_factors();

        let salinity_corrected = base_torque * factors.salinity;
        let temperature_corrected = salinity_corrected * factors.temperature;
        let corrected = temperature_corrected * factors.vibration;

        let breakdown = CorrectionBreakdown::from(factors);
        info!(
            "Environmental corrections applied ({}): x{:.3}",
            self.spec.environment, breakdown.total
        );
        (corrected, breakdown)
    }

    /// Safety factor required by the specification's classification society
    pub fn get_classification_safety_factor(&self) -> f64 {
        self.spec.classification.safety_factor()
    }

    /// Time-weighted RMS torque of a duty cycle; see [`duty_cycle::rms_torque`]
    pub fn calculate_rms_torque(&self, time_series: &[f64], torque_series: &[f64]) -> SizingResult<f64> {
        duty_cycle::rms_torque(time_series, torque_series)
    }

    /// Run the full sizing pipeline.
    ///
    /// Steps run in a fixed order; the first failing step aborts the
    /// calculation and its error is returned unchanged.
    pub fn perform_comprehensive_calculation(
        &self,
        duty_cycle: Option<&DutyCycle>,
    ) -> SizingResult<CalculationResult> {
        let Kilograms(load_kg) = Tonnes(self.spec.load_capacity_ton).into();
        let basic_torque_nm = self.calculate_torque_from_mass(load_kg)?;

        let (corrected_torque_nm, environmental_corrections) =
            self.apply_environmental_corrections(basic_torque_nm);

        let classification_safety_factor = self.get_classification_safety_factor();
        let required_torque_nm =
            corrected_torque_nm * classification_safety_factor * self.spec.safety_factor;

        let motor_power_kw = self.calculate_power_requirement(required_torque_nm);

        let optimal_gear_ratio = self.calculate_optimal_gear_ratio()?;
        let minimum_gear_ratio = self.calculate_minimum_gear_ratio()?;

        let rms_torque_nm = duty_cycle
            .map(|cycle| self.calculate_rms_torque(&cycle.time_s, &cycle.torque_nm))
            .transpose()?;

        info!(
            "Sizing complete: {required_torque_nm:.0} N·m, {motor_power_kw:.1} kW"
        );

        Ok(CalculationResult {
            required_torque_nm,
            motor_power_kw,
            optimal_gear_ratio,
            minimum_gear_ratio,
            rms_torque_nm,
            environmental_corrections,
            basic_torque_nm,
            corrected_torque_nm,
            classification_safety_factor,
        })
    }

    /// Full pipeline without a duty cycle
    pub fn perform_calculation(&self) -> SizingResult<CalculationResult> {
        self.perform_comprehensive_calculation(None)
    }

    /// Full pipeline including the RMS torque of `duty_cycle`
    pub fn perform_calculation_with_duty_cycle(&self, duty_cycle: &DutyCycle) -> SizingResult<CalculationResult> {
        self.perform_comprehensive_calculation(Some(duty_cycle))
    }
}
