//! # File I/O Module
//!
//! Reads calculation inputs from JSON files and saves reports:
//! - **Input files**: `MotorSpecification`, `DutyCycle` and `HoistInput` as JSON
//! - **Atomic saves**: reports are written to `.tmp`, re-read and verified,
//!   then renamed over the target
//! - **Version validation**: saved reports must match the schema major version
//!
//! ## Example
//!
//! ```rust,no_run
//! use motor_core::file_io::{load_specification, save_report};
//! use motor_core::report::SizingReport;
//! use std::path::Path;
//!
//! let spec = load_specification(Path::new("winch.json")).unwrap();
//! let report = SizingReport::generate("W-1", spec, None).unwrap();
//! save_report(&report, Path::new("winch-report.json")).unwrap();
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use log::info;
use serde::de::DeserializeOwned;

use crate::duty_cycle::DutyCycle;
use crate::errors::{SizingError, SizingResult};
use crate::hoist::HoistInput;
use crate::report::{SizingReport, SCHEMA_VERSION};
use crate::specification::MotorSpecification;

/// Read and parse a JSON file
fn load_json<T: DeserializeOwned>(path: &Path) -> SizingResult<T> {
    let mut file = File::open(path)
        .map_err(|e| SizingError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| SizingError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| {
        SizingError::serialization(format!("Invalid JSON in {}: {}", path.display(), e))
    })
}

/// Load a motor specification from a JSON file.
///
/// The specification is parsed only; bounds are checked when a calculator
/// is built from it.
pub fn load_specification(path: &Path) -> SizingResult<MotorSpecification> {
    load_json(path)
}

/// Load a duty cycle (`time_s` / `torque_nm` arrays) from a JSON file.
pub fn load_duty_cycle(path: &Path) -> SizingResult<DutyCycle> {
    load_json(path)
}

/// Load hoist parameters from a JSON file; missing fields take defaults.
pub fn load_hoist_input(path: &Path) -> SizingResult<HoistInput> {
    load_json(path)
}

/// Save a report using atomic write.
///
/// 1. Serialize to pretty JSON
/// 2. Write to `<path>.tmp` and sync
/// 3. Re-read the temp file and check it parses
/// 4. Rename over the target
pub fn save_report(report: &SizingReport, path: &Path) -> SizingResult<()> {
    let json = serde_json::to_string_pretty(report)?;

    let tmp_path = path.with_extension("json.tmp");
    let tmp_display = tmp_path.display().to_string();

    let mut tmp_file = File::create(&tmp_path)
        .map_err(|e| SizingError::file_error("create temp file", &tmp_display, e.to_string()))?;
    tmp_file
        .write_all(json.as_bytes())
        .map_err(|e| SizingError::file_error("write temp file", &tmp_display, e.to_string()))?;
    tmp_file
        .sync_all()
        .map_err(|e| SizingError::file_error("sync temp file", &tmp_display, e.to_string()))?;
    drop(tmp_file);

    if let Err(e) = load_json::<SizingReport>(&tmp_path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        SizingError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    info!("Report saved to {}", path.display());
    Ok(())
}

/// Load a previously saved report, checking its schema version.
pub fn load_report(path: &Path) -> SizingResult<SizingReport> {
    let report: SizingReport = load_json(path)?;
    validate_version(&report.meta.version)?;
    Ok(report)
}

/// Accept files with the same major version (and, for 0.x, no newer minor).
fn validate_version(file_version: &str) -> SizingResult<()> {
    let mismatch = || SizingError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    if file_parts.is_empty() || file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;
    use uuid::Uuid;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("motor_sizing_test_{}_{}.json", name, Uuid::new_v4()))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let report = SizingReport::generate("W-1", MotorSpecification::container_ship_winch(), None).unwrap();

        save_report(&report, &path).unwrap();
        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded, report);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic");
        let report = SizingReport::generate("W-1", MotorSpecification::container_ship_winch(), None).unwrap();

        save_report(&report, &path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_specification() {
        let path = temp_path("spec");
        let json = serde_json::to_string(&MotorSpecification::container_ship_winch()).unwrap();
        fs::write(&path, json).unwrap();

        let spec = load_specification(&path).unwrap();
        assert_eq!(spec, MotorSpecification::container_ship_winch());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_duty_cycle() {
        let path = temp_path("cycle");
        fs::write(&path, r#"{"time_s": [1.0, 2.0], "torque_nm": [100.0, 200.0]}"#).unwrap();

        let cycle = load_duty_cycle(&path).unwrap();
        assert_eq!(cycle.len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_report_with_nan_duty_cycle_roundtrip() {
        let path = temp_path("nan_cycle");
        let cycle = DutyCycle::new(vec![3.0, f64::NAN, 1.0], vec![900.0, 400.0, 300.0]);
        let report =
            SizingReport::generate("W-1", MotorSpecification::container_ship_winch(), Some(cycle)).unwrap();

        save_report(&report, &path).unwrap();
        let loaded = load_report(&path).unwrap();

        let loaded_cycle = loaded.duty_cycle.as_ref().unwrap();
        assert!(loaded_cycle.time_s[1].is_nan());
        assert_eq!(loaded_cycle.torque_nm, vec![900.0, 400.0, 300.0]);
        assert_eq!(loaded.result, report.result);
        assert_eq!(loaded.result.rms_torque_nm, loaded_cycle.rms_torque().ok());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_duty_cycle_with_null_sample() {
        let path = temp_path("null_cycle");
        fs::write(&path, r#"{"time_s": [3.0, null, 1.0], "torque_nm": [900.0, 400.0, 300.0]}"#).unwrap();

        let cycle = load_duty_cycle(&path).unwrap();
        assert_eq!(cycle.len(), 3);
        assert!(cycle.time_s[1].is_nan());
        assert!(cycle.rms_torque().is_ok());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let err = load_specification(Path::new("/nonexistent/spec.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_invalid_json() {
        let path = temp_path("invalid");
        fs::write(&path, "{ not json").unwrap();

        let err = load_hoist_input(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
