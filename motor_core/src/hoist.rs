//! # Rope Hoist Sizing
//!
//! Sizes a crane/winch hoist motor from hook load and hook speed for a
//! multi-part (reeved) rope system.
//!
//! ## Method
//!
//! ```text
//! a       = v_hook / t_acc                       (0 if t_acc = 0)
//! F_hook  = m (g + a) × k_dyn
//! T_line  = F_hook / (n_parts × η_reeving)
//! r       = d_drum × k_layer / 2
//! T_drum  = T_line × r
//! ω_drum  = n_parts × v_hook / r
//! P_motor = T_drum ω_drum / (η_gear η_bearing) × SF_service
//! i       = ω_motor / ω_drum
//! T_motor = T_drum / (i η_gear) × SF_service
//! ```
//!
//! ## JSON Example
//!
//! Every field except load and speed has a default:
//!
//! ```json
//! { "load_ton": 50.0, "hoist_speed_m_per_min": 10.0, "reeving": 4 }
//! ```

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::catalogue::select_standard_power;
use crate::errors::{SizingError, SizingResult};
use crate::units::{Kilograms, Kilowatts, RadiansPerSecond, Rpm, Tonnes, Watts, GRAVITY_M_PER_S2};

/// Input parameters for a reeved rope hoist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoistInput {
    /// Hook load in metric tonnes
    pub load_ton: f64,

    /// Hook speed in metres per minute
    pub hoist_speed_m_per_min: f64,

    /// Rope drum diameter in metres
    pub drum_diameter_m: f64,

    /// Number of rope parts supporting the hook block
    pub reeving: u32,

    /// Time to reach full hook speed in seconds (0 = ignore acceleration)
    pub acceleration_time_s: f64,

    /// Dynamic load coefficient (1.05 - 1.15 typical for harbour cranes)
    pub dynamic_coefficient: f64,

    /// Combined sheave/rope efficiency
    pub reeving_efficiency: f64,

    /// Gearbox efficiency
    pub gearbox_efficiency: f64,

    /// Bearing efficiency
    pub bearing_efficiency: f64,

    /// Radius multiplier for upper rope layers on the drum (≥ 1)
    pub radius_layer_factor: f64,

    /// Motor speed in rpm (1750 for a 4-pole motor at 60 Hz)
    pub motor_rpm: f64,

    /// Motor service factor (≥ 1)
    pub service_factor: f64,
}

impl Default for HoistInput {
    fn default() -> Self {
        Self {
            load_ton: 50.0,
            hoist_speed_m_per_min: 10.0,
            drum_diameter_m: 1.2,
            reeving: 4,
            acceleration_time_s: 3.0,
            dynamic_coefficient: 1.15,
            reeving_efficiency: 0.94,
            gearbox_efficiency: 0.95,
            bearing_efficiency: 0.98,
            radius_layer_factor: 1.0,
            motor_rpm: 1750.0,
            service_factor: 1.10,
        }
    }
}

fn check(ok: bool, field: &str, value: f64, reason: &str) -> SizingResult<()> {
    if ok {
        Ok(())
    } else {
        error!("Hoist input rejected: {field} = {value} ({reason})");
        Err(SizingError::invalid_input(field, value.to_string(), reason))
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_efficiency(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

impl HoistInput {
    /// Hoist with default drivetrain parameters
    pub fn new(load_ton: f64, hoist_speed_m_per_min: f64) -> Self {
        Self {
            load_ton,
            hoist_speed_m_per_min,
            ..Self::default()
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> SizingResult<()> {
        check(positive(self.load_ton), "load_ton", self.load_ton, "Load must be positive")?;
        check(
            positive(self.hoist_speed_m_per_min),
            "hoist_speed_m_per_min",
            self.hoist_speed_m_per_min,
            "Hoist speed must be positive",
        )?;
        check(
            positive(self.drum_diameter_m),
            "drum_diameter_m",
            self.drum_diameter_m,
            "Drum diameter must be positive",
        )?;
        if self.reeving == 0 {
            error!("Hoist input rejected: reeving = 0");
            return Err(SizingError::invalid_input(
                "reeving",
                "0",
                "At least one rope part is required",
            ));
        }
        check(
            self.acceleration_time_s >= 0.0 && self.acceleration_time_s.is_finite(),
            "acceleration_time_s",
            self.acceleration_time_s,
            "Acceleration time cannot be negative",
        )?;
        check(
            self.dynamic_coefficient >= 1.0 && self.dynamic_coefficient.is_finite(),
            "dynamic_coefficient",
            self.dynamic_coefficient,
            "Dynamic coefficient must be at least 1",
        )?;
        check(
            is_efficiency(self.reeving_efficiency),
            "reeving_efficiency",
            self.reeving_efficiency,
            "Efficiency must be in (0, 1]",
        )?;
        check(
            is_efficiency(self.gearbox_efficiency),
            "gearbox_efficiency",
            self.gearbox_efficiency,
            "Efficiency must be in (0, 1]",
        )?;
        check(
            is_efficiency(self.bearing_efficiency),
            "bearing_efficiency",
            self.bearing_efficiency,
            "Efficiency must be in (0, 1]",
        )?;
        check(
            self.radius_layer_factor >= 1.0 && self.radius_layer_factor.is_finite(),
            "radius_layer_factor",
            self.radius_layer_factor,
            "Layer factor must be at least 1",
        )?;
        check(positive(self.motor_rpm), "motor_rpm", self.motor_rpm, "Motor speed must be positive")?;
        check(
            self.service_factor >= 1.0 && self.service_factor.is_finite(),
            "service_factor",
            self.service_factor,
            "Service factor must be at least 1",
        )?;
        Ok(())
    }

    /// Hook speed in m/s
    pub fn hook_speed_m_per_s(&self) -> f64 {
        self.hoist_speed_m_per_min / 60.0
    }

    /// Effective drum radius including the rope layer allowance (m)
    pub fn effective_drum_radius_m(&self) -> f64 {
        self.drum_diameter_m * self.radius_layer_factor / 2.0
    }
}

/// Results from hoist sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoistResult {
    /// Design force at the hook including acceleration and dynamics (N)
    pub hook_force_n: f64,

    /// Rope line tension at the drum (N)
    pub line_tension_n: f64,

    /// Torque at the drum (N·m)
    pub drum_torque_nm: f64,

    /// Drum angular velocity (rad/s)
    pub drum_speed_rad_per_s: f64,

    /// Required motor output including service factor (kW)
    pub motor_power_kw: f64,

    /// Catalogue rating selected for `motor_power_kw` (kW)
    pub selected_power_kw: f64,

    /// True if the requirement exceeds the largest catalogue rating
    pub exceeds_catalogue: bool,

    /// Motor-to-drum reduction ratio
    pub gear_ratio: f64,

    /// Torque at the motor shaft (N·m)
    pub motor_torque_nm: f64,
}

/// Size a hoist motor.
///
/// # Example
///
/// ```rust
/// use motor_core::hoist::{size_hoist_motor, HoistInput};
///
/// let result = size_hoist_motor(&HoistInput::new(50.0, 10.0)).unwrap();
/// assert_eq!(result.selected_power_kw, 132.0);
/// ```
pub fn size_hoist_motor(input: &HoistInput) -> SizingResult<HoistResult> {
    input.validate()?;

    let Kilograms(mass_kg) = Tonnes(input.load_ton).into();
    let hook_speed = input.hook_speed_m_per_s();
    let radius = input.effective_drum_radius_m();
    let acceleration = if input.acceleration_time_s > 0.0 {
        hook_speed / input.acceleration_time_s
    } else {
        0.0
    };

    let hook_force_n = mass_kg * (GRAVITY_M_PER_S2 + acceleration) * input.dynamic_coefficient;
    let parts = f64::from(input.reeving);
    let line_tension_n = hook_force_n / (parts * input.reeving_efficiency);

    let drum_torque_nm = line_tension_n * radius;
    let drum_speed_rad_per_s = parts * hook_speed / radius;

    let drum_power = Watts(drum_torque_nm * drum_speed_rad_per_s);
    let mechanical_efficiency = input.gearbox_efficiency * input.bearing_efficiency;
    let Kilowatts(motor_power_kw) = (drum_power / mechanical_efficiency * input.service_factor).into();

    let RadiansPerSecond(motor_speed) = Rpm(input.motor_rpm).into();
    let gear_ratio = motor_speed / drum_speed_rad_per_s;
    let motor_torque_nm =
        drum_torque_nm / (gear_ratio * input.gearbox_efficiency) * input.service_factor;

    let selection = select_standard_power(motor_power_kw);
    debug!(
        "Hoist sizing: {motor_power_kw:.1} kW required, {} kW selected, ratio {gear_ratio:.1}:1",
        selection.rating_kw
    );

    Ok(HoistResult {
        hook_force_n,
        line_tension_n,
        drum_torque_nm,
        drum_speed_rad_per_s,
        motor_power_kw,
        selected_power_kw: selection.rating_kw,
        exceeds_catalogue: selection.exceeds_catalogue,
        gear_ratio,
        motor_torque_nm,
    })
}
