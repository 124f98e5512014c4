//! Standard Motor Ratings
//!
//! IEC standard output ratings for three-phase induction motors, used to
//! round a computed power requirement up to a purchasable motor.

use serde::{Deserialize, Serialize};

/// Standard motor output ratings in kW, ascending
pub const STANDARD_MOTOR_POWERS_KW: [f64; 19] = [
    7.5, 11.0, 15.0, 18.5, 22.0, 30.0, 37.0, 45.0, 55.0, 75.0, 90.0, 110.0, 132.0, 160.0, 200.0,
    250.0, 315.0, 400.0, 500.0,
];

/// Outcome of picking a catalogue rating for a power requirement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardMotorSelection {
    /// Selected catalogue rating (kW)
    pub rating_kw: f64,

    /// True when the requirement is above the largest rating; `rating_kw`
    /// is then the largest rating and does not cover the requirement
    pub exceeds_catalogue: bool,
}

/// Smallest standard rating that covers `required_kw`.
///
/// Returns `None` when the requirement exceeds the whole catalogue.
pub fn standard_rating_for(required_kw: f64) -> Option<f64> {
    STANDARD_MOTOR_POWERS_KW
        .iter()
        .copied()
        .find(|&rating| rating >= required_kw)
}

/// Pick a catalogue rating, falling back to the largest one.
pub fn select_standard_power(required_kw: f64) -> StandardMotorSelection {
    match standard_rating_for(required_kw) {
        Some(rating_kw) => StandardMotorSelection {
            rating_kw,
            exceeds_catalogue: false,
        },
        None => StandardMotorSelection {
            rating_kw: STANDARD_MOTOR_POWERS_KW[STANDARD_MOTOR_POWERS_KW.len() - 1],
            exceeds_catalogue: true,
        },
    }
}
