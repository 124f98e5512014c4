//! # Duty Cycle
//!
//! A duty cycle is a sequence of `(elapsed time, torque)` segments describing
//! one operating cycle of the motor. Its time-weighted RMS torque sizes the
//! motor for continuous (thermal) duty:
//!
//! ```text
//! T_rms = sqrt( Σ(T_i² · t_i) / Σ t_i )
//! ```
//!
//! Segments where either value is NaN are dropped from both sums. JSON has
//! no NaN, so a missing sample is written and read back as `null`.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "time_s": [3.0, 2.0, 1.0, 3.0, 2.0, 1.0],
//!   "torque_nm": [900.0, 600.0, 0.0, 300.0, 600.0, 0.0]
//! }
//! ```

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{SizingError, SizingResult};

const RMS_OPERATION: &str = "calculate_rms_torque";

/// Paired time/torque samples for one operating cycle.
///
/// The two sequences are not checked on construction; mismatched or empty
/// data is reported as a domain error when the RMS torque is computed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DutyCycle {
    /// Duration of each segment in seconds
    #[serde(deserialize_with = "samples_with_gaps")]
    pub time_s: Vec<f64>,

    /// Torque held during each segment in N·m
    #[serde(deserialize_with = "samples_with_gaps")]
    pub torque_nm: Vec<f64>,
}

/// Read a sample array where `null` marks a missing (NaN) sample
fn samples_with_gaps<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let samples = Vec::<Option<f64>>::deserialize(deserializer)?;
    Ok(samples.into_iter().map(|s| s.unwrap_or(f64::NAN)).collect())
}

impl DutyCycle {
    /// Create a duty cycle from separate time and torque sequences
    pub fn new(time_s: impl Into<Vec<f64>>, torque_nm: impl Into<Vec<f64>>) -> Self {
        Self {
            time_s: time_s.into(),
            torque_nm: torque_nm.into(),
        }
    }

    /// Build a duty cycle from `(time, torque)` segments
    pub fn from_segments(segments: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (time_s, torque_nm) = segments.into_iter().unzip();
        Self { time_s, torque_nm }
    }

    /// Number of time samples
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    /// True if the cycle holds no time samples
    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    /// Time-weighted RMS torque over the cycle (N·m)
    pub fn rms_torque(&self) -> SizingResult<f64> {
        rms_torque(&self.time_s, &self.torque_nm)
    }

    /// Largest absolute torque among valid segments, if any
    pub fn peak_torque_nm(&self) -> Option<f64> {
        valid_pairs(&self.time_s, &self.torque_nm)
            .map(|(_, torque)| torque.abs())
            .reduce(f64::max)
    }
}

/// Segments where neither value is NaN
fn valid_pairs<'a>(time: &'a [f64], torque: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    time.iter()
        .zip(torque)
        .map(|(&t, &tau)| (t, tau))
        .filter(|(t, tau)| !t.is_nan() && !tau.is_nan())
}

/// Time-weighted root-mean-square torque.
///
/// # Errors
///
/// Returns [`SizingError::DomainError`] when
/// - the sequences differ in length,
/// - the sequences are empty,
/// - every segment contains a NaN,
/// - a valid segment has a negative time,
/// - the valid segment times sum to zero.
///
/// # Example
///
/// ```rust
/// use motor_core::duty_cycle::rms_torque;
///
/// let rms = rms_torque(&[3.0, 2.0, 1.0, 3.0, 2.0, 1.0], &[900.0, 600.0, 0.0, 300.0, 600.0, 0.0]).unwrap();
/// assert!((rms - 587.37).abs() < 0.01);
/// ```
pub fn rms_torque(time_series: &[f64], torque_series: &[f64]) -> SizingResult<f64> {
    if time_series.len() != torque_series.len() {
        return Err(SizingError::domain(
            RMS_OPERATION,
            format!(
                "time and torque sequences differ in length ({} vs {})",
                time_series.len(),
                torque_series.len()
            ),
        ));
    }
    if time_series.is_empty() {
        return Err(SizingError::domain(RMS_OPERATION, "duty cycle is empty"));
    }

    let mut valid = 0usize;
    let mut total_time = 0.0;
    let mut weighted_torque_squared = 0.0;
    for (t, tau) in valid_pairs(time_series, torque_series) {
        if t < 0.0 {
            return Err(SizingError::domain(
                RMS_OPERATION,
                format!("segment time cannot be negative (got {t} s)"),
            ));
        }
        valid += 1;
        total_time += t;
        weighted_torque_squared += tau * tau * t;
    }

    if valid == 0 {
        return Err(SizingError::domain(
            RMS_OPERATION,
            "duty cycle contains no valid (non-NaN) segments",
        ));
    }
    if valid < time_series.len() {
        warn!(
            "Dropped {} duty-cycle segment(s) containing NaN",
            time_series.len() - valid
        );
    }
    if total_time == 0.0 {
        return Err(SizingError::domain(
            RMS_OPERATION,
            "total duty-cycle time is zero",
        ));
    }

    let rms = (weighted_torque_squared / total_time).sqrt();
    debug!("RMS torque: {rms:.2} N·m over {total_time} s");
    Ok(rms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TIME: [f64; 6] = [3.0, 2.0, 1.0, 3.0, 2.0, 1.0];
    const TORQUE: [f64; 6] = [900.0, 600.0, 0.0, 300.0, 600.0, 0.0];

    #[test]
    fn test_reference_cycle() {
        // Σ(t·τ²) = 4,140,000, Σt = 12
        let rms = rms_torque(&TIME, &TORQUE).unwrap();
        assert_relative_eq!(rms, 345_000f64.sqrt(), max_relative = 1e-12);
        assert!((rms - 587.2).abs() < 0.5);
    }

    #[test]
    fn test_reordering_invariant() {
        let forward = DutyCycle::new(TIME, TORQUE);
        let reversed = DutyCycle::from_segments(
            TIME.iter().copied().zip(TORQUE.iter().copied()).rev(),
        );
        assert_relative_eq!(
            forward.rms_torque().unwrap(),
            reversed.rms_torque().unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_single_segment_is_abs_torque() {
        for weight in [0.1, 1.0, 42.0] {
            assert_relative_eq!(rms_torque(&[weight], &[-750.0]).unwrap(), 750.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_length_mismatch() {
        let err = rms_torque(&[1.0, 2.0], &[5.0]).unwrap_err();
        assert!(err.is_domain());
        assert!(err.to_string().contains("differ in length"));
    }

    #[test]
    fn test_empty_cycle() {
        assert!(rms_torque(&[], &[]).unwrap_err().is_domain());
        assert!(DutyCycle::default().is_empty());
    }

    #[test]
    fn test_nan_pairs_dropped() {
        let with_nan = rms_torque(&[3.0, f64::NAN, 2.0, 1.0], &[900.0, 400.0, f64::NAN, 300.0]).unwrap();
        let clean = rms_torque(&[3.0, 1.0], &[900.0, 300.0]).unwrap();
        assert_relative_eq!(with_nan, clean, max_relative = 1e-12);
    }

    #[test]
    fn test_all_nan_rejected() {
        let err = rms_torque(&[f64::NAN, 1.0], &[100.0, f64::NAN]).unwrap_err();
        assert!(err.to_string().contains("no valid"));
    }

    #[test]
    fn test_zero_total_time() {
        let err = rms_torque(&[0.0, 0.0], &[100.0, 200.0]).unwrap_err();
        assert!(err.to_string().contains("zero"));
    }

    #[test]
    fn test_negative_time_rejected() {
        let err = rms_torque(&[-2.0, 1.0], &[1.0, 10.0]).unwrap_err();
        assert!(err.is_domain());
        assert!(err.to_string().contains("negative"));

        // A negative time paired with NaN torque is dropped, not rejected
        let rms = rms_torque(&[-2.0, 1.0], &[f64::NAN, 10.0]).unwrap();
        assert_relative_eq!(rms, 10.0);
    }

    #[test]
    fn test_null_samples_read_as_nan() {
        let cycle: DutyCycle =
            serde_json::from_str(r#"{"time_s": [3.0, null, 1.0], "torque_nm": [900.0, 400.0, 300.0]}"#).unwrap();
        assert_eq!(cycle.len(), 3);
        assert!(cycle.time_s[1].is_nan());
        assert_relative_eq!(
            cycle.rms_torque().unwrap(),
            rms_torque(&[3.0, 1.0], &[900.0, 300.0]).unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_nan_samples_survive_json() {
        let cycle = DutyCycle::new(vec![3.0, f64::NAN, 1.0], vec![900.0, 400.0, 300.0]);
        let json = serde_json::to_string(&cycle).unwrap();
        assert!(json.contains("null"));

        let back: DutyCycle = serde_json::from_str(&json).unwrap();
        assert!(back.time_s[1].is_nan());
        assert_eq!(back.torque_nm, cycle.torque_nm);
    }

    #[test]
    fn test_peak_torque() {
        let cycle = DutyCycle::new(vec![1.0, 1.0, f64::NAN], vec![-800.0, 500.0, 2000.0]);
        assert_eq!(cycle.peak_torque_nm(), Some(800.0));
        assert_eq!(DutyCycle::default().peak_torque_nm(), None);
    }
}
