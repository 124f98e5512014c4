//! # motor_core - Marine Motor Sizing Engine
//!
//! `motor_core` computes electric-motor requirements for marine winches and
//! hoists: required torque, motor power, gear ratios and duty-cycle RMS
//! torque, with classification-society safety factors and marine
//! environmental corrections applied.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: a calculator holds one immutable, validated specification
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Rich Errors**: validation and domain errors name what failed
//! - **No I/O in calculations**: rendering is left to the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use motor_core::{MotorSizingCalculator, MotorSpecification};
//!
//! let calculator = MotorSizingCalculator::new(MotorSpecification::container_ship_winch())?;
//! let result = calculator.perform_calculation()?;
//!
//! assert!((result.optimal_gear_ratio - 5.83).abs() < 0.01);
//! # Ok::<(), motor_core::SizingError>(())
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Sizing pipeline and results
//! - [`specification`] - Input record and validation
//! - [`marine`] - Environmental and classification tables
//! - [`duty_cycle`] - Duty cycles and RMS torque
//! - [`recommendations`] - Design margins and environment comparison
//! - [`hoist`] - Reeved rope hoist sizing
//! - [`catalogue`] - Standard motor ratings
//! - [`report`] - Archivable sizing reports
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON input files and atomic report saves

pub mod calculator;
pub mod catalogue;
pub mod duty_cycle;
pub mod errors;
pub mod file_io;
pub mod hoist;
pub mod marine;
pub mod recommendations;
pub mod report;
pub mod specification;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculator::{CalculationResult, CorrectionBreakdown, MotorSizingCalculator};
pub use duty_cycle::DutyCycle;
pub use errors::{SizingError, SizingResult};
pub use marine::{ClassificationSociety, MarineEnvironment};
pub use report::SizingReport;
pub use specification::MotorSpecification;
