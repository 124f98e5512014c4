//! # Unit Types
//!
//! Type-safe wrappers for the SI quantities used in motor sizing. These are
//! plain `f64` newtypes: they serialize as bare numbers and cost nothing at
//! runtime, but keep tonnes from being passed where kilograms are expected.
//!
//! ## SI Units
//!
//! - Mass: tonnes (t), kilograms (kg)
//! - Force: newtons (N)
//! - Torque: newton-metres (N·m)
//! - Rotational speed: revolutions per minute (rpm), radians per second (rad/s)
//! - Power: watts (W), kilowatts (kW)
//!
//! ## Example
//!
//! ```rust
//! use motor_core::units::{Kilograms, NewtonMeters, Rpm, RadiansPerSecond, Tonnes, Watts, Kilowatts};
//!
//! let mass: Kilograms = Tonnes(50.0).into();
//! assert_eq!(mass.0, 50_000.0);
//!
//! let omega: RadiansPerSecond = Rpm(60.0).into();
//! let power: Watts = NewtonMeters(1000.0) * omega;
//! let power_kw: Kilowatts = power.into();
//! assert!((power_kw.0 - 6.2832).abs() < 1e-3);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravity (m/s²)
pub const GRAVITY_M_PER_S2: f64 = 9.81;

/// Conversion factor from rpm to rad/s
pub const RPM_TO_RAD_PER_SEC: f64 = 2.0 * PI / 60.0;

/// Watts per kilowatt
pub const WATTS_PER_KILOWATT: f64 = 1000.0;

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in metric tonnes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Self {
        Tonnes(kg.0 / 1000.0)
    }
}

impl Kilograms {
    /// Weight of this mass under standard gravity
    pub fn weight(self) -> Newtons {
        Newtons(self.0 * GRAVITY_M_PER_S2)
    }
}

// ============================================================================
// Force / Torque Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Torque in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

// ============================================================================
// Rotational Speed Units
// ============================================================================

/// Rotational speed in revolutions per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f64);

/// Angular velocity in radians per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadiansPerSecond(pub f64);

impl From<Rpm> for RadiansPerSecond {
    fn from(rpm: Rpm) -> Self {
        RadiansPerSecond(rpm.0 * RPM_TO_RAD_PER_SEC)
    }
}

impl From<RadiansPerSecond> for Rpm {
    fn from(omega: RadiansPerSecond) -> Self {
        Rpm(omega.0 / RPM_TO_RAD_PER_SEC)
    }
}

// ============================================================================
// Power Units
// ============================================================================

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Power in kilowatts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilowatts(pub f64);

impl From<Watts> for Kilowatts {
    fn from(w: Watts) -> Self {
        Kilowatts(w.0 / WATTS_PER_KILOWATT)
    }
}

impl From<Kilowatts> for Watts {
    fn from(kw: Kilowatts) -> Self {
        Watts(kw.0 * WATTS_PER_KILOWATT)
    }
}

/// Mechanical power P = T·ω
impl Mul<RadiansPerSecond> for NewtonMeters {
    type Output = Watts;
    fn mul(self, rhs: RadiansPerSecond) -> Watts {
        Watts(self.0 * rhs.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Tonnes);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Newtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(Rpm);
impl_arithmetic!(RadiansPerSecond);
impl_arithmetic!(Watts);
impl_arithmetic!(Kilowatts);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tonnes_to_weight() {
        let kg: Kilograms = Tonnes(50.0).into();
        assert_eq!(kg.0, 50_000.0);
        assert_relative_eq!(kg.weight().0, 490_500.0, max_relative = 1e-12);
    }

    #[test]
    fn test_rpm_to_rad_per_sec() {
        let omega: RadiansPerSecond = Rpm(1800.0).into();
        assert_relative_eq!(omega.0, 60.0 * PI, max_relative = 1e-12);
        let back: Rpm = omega.into();
        assert_relative_eq!(back.0, 1800.0, max_relative = 1e-12);
    }

    #[test]
    fn test_mechanical_power() {
        let watts = NewtonMeters(100.0) * RadiansPerSecond(10.0);
        let kw: Kilowatts = watts.into();
        assert_eq!(kw.0, 1.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = NewtonMeters(10.0);
        let b = NewtonMeters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let kw = Kilowatts(132.0);
        let json = serde_json::to_string(&kw).unwrap();
        assert_eq!(json, "132.0");
    }
}
