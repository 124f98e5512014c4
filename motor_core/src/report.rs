//! # Sizing Report
//!
//! The `SizingReport` bundles one calculation with its inputs and
//! recommendations so it can be archived or handed to another tool as JSON.
//!
//! ## Structure
//!
//! ```text
//! SizingReport
//! ├── meta: ReportMetadata (schema version, id, label, timestamp)
//! ├── specification: MotorSpecification
//! ├── duty_cycle: Option<DutyCycle>
//! ├── result: CalculationResult
//! └── recommendations: DesignRecommendations
//! ```
//!
//! ## Example
//!
//! ```rust
//! use motor_core::report::SizingReport;
//! use motor_core::specification::MotorSpecification;
//!
//! let report = SizingReport::generate("Winch W-1", MotorSpecification::container_ship_winch(), None).unwrap();
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("Winch W-1"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::{CalculationResult, MotorSizingCalculator};
use crate::duty_cycle::DutyCycle;
use crate::errors::SizingResult;
use crate::recommendations::DesignRecommendations;
use crate::specification::MotorSpecification;

/// Current schema version for saved reports
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Report metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Unique report identifier
    pub report_id: Uuid,

    /// User label (e.g., "Aft mooring winch")
    pub label: String,

    /// When the report was generated
    pub generated: DateTime<Utc>,
}

impl ReportMetadata {
    /// Fresh metadata stamped with the current time
    pub fn new(label: impl Into<String>) -> Self {
        ReportMetadata {
            version: SCHEMA_VERSION.to_string(),
            report_id: Uuid::new_v4(),
            label: label.into(),
            generated: Utc::now(),
        }
    }
}

/// One archived sizing calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingReport {
    pub meta: ReportMetadata,
    pub specification: MotorSpecification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<DutyCycle>,
    pub result: CalculationResult,
    pub recommendations: DesignRecommendations,
}

impl SizingReport {
    /// Run the comprehensive calculation for `specification` and wrap it in a report.
    pub fn generate(
        label: impl Into<String>,
        specification: MotorSpecification,
        duty_cycle: Option<DutyCycle>,
    ) -> SizingResult<Self> {
        let calculator = MotorSizingCalculator::new(specification)?;
        let result = calculator.perform_comprehensive_calculation(duty_cycle.as_ref())?;
        let specification = calculator.specification().clone();
        let recommendations = DesignRecommendations::from_result(&specification, &result);

        Ok(SizingReport {
            meta: ReportMetadata::new(label),
            specification,
            duty_cycle,
            result,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_with_duty_cycle() {
        let cycle = DutyCycle::new(vec![10.0, 5.0, 3.0], vec![120_000.0, 80_000.0, 0.0]);
        let report = SizingReport::generate(
            "W-1",
            MotorSpecification::container_ship_winch(),
            Some(cycle),
        )
        .unwrap();

        assert_eq!(report.meta.version, SCHEMA_VERSION);
        assert_eq!(report.meta.label, "W-1");
        assert!(report.result.rms_torque_nm.is_some());
    }

    #[test]
    fn test_generate_propagates_validation_error() {
        let spec = MotorSpecification {
            motor_inertia_kgm2: 0.0,
            ..MotorSpecification::container_ship_winch()
        };
        let err = SizingReport::generate("bad", spec, None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_unique_ids() {
        let a = ReportMetadata::new("a");
        let b = ReportMetadata::new("b");
        assert_ne!(a.report_id, b.report_id);
    }

    #[test]
    fn test_serialization() {
        let report = SizingReport::generate("W-2", MotorSpecification::container_ship_winch(), None).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(!json.contains("duty_cycle"));
        let roundtrip: SizingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
