//! # Marine Correction Tables
//!
//! Static lookup tables for the two regulatory/environmental inputs of a
//! motor specification.
//!
//! ## Environmental Corrections
//!
//! Each operating regime carries three torque multipliers. They are applied
//! one after another onto the base torque:
//!
//! ```text
//! T_corrected = T_base × k_salinity × k_temperature × k_vibration
//! ```
//!
//! | Environment | Salinity | Temperature | Vibration | Total  |
//! |-------------|----------|-------------|-----------|--------|
//! | Coastal     | 1.15     | 1.05        | 1.05      | 1.2679 |
//! | Offshore    | 1.20     | 1.08        | 1.10      | 1.4256 |
//! | Deep sea    | 1.10     | 1.15        | 1.08      | 1.3662 |
//! | Arctic      | 1.05     | 1.20        | 1.15      | 1.4490 |
//! | Tropical    | 1.25     | 1.25        | 1.12      | 1.7500 |
//!
//! ## Classification Safety Factors
//!
//! | Society | Factor |
//! |---------|--------|
//! | DNV     | 2.0    |
//! | ABS     | 2.2    |
//! | KR      | 2.0    |
//! | BV      | 2.0    |
//! | LR      | 2.0    |
//! | other   | 2.0    |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SizingError;

/// Safety factor applied for classification societies without a table entry
pub const DEFAULT_CLASSIFICATION_SAFETY_FACTOR: f64 = 2.0;

// ============================================================================
// Marine Environment
// ============================================================================

/// Marine operating regime of the winch/hoist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarineEnvironment {
    /// Near-shore, harbour and port operation
    Coastal,
    /// Offshore installations and near-sea transit
    #[default]
    Offshore,
    /// Open-ocean service
    DeepSea,
    /// Polar waters, low temperature
    Arctic,
    /// Hot and highly saline waters
    Tropical,
}

/// The three environmental torque multipliers for one operating regime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    /// Salt exposure / corrosion factor
    pub salinity: f64,
    /// Ambient temperature factor
    pub temperature: f64,
    /// Ship motion and vibration factor
    pub vibration: f64,
}

impl EnvironmentalFactors {
    /// Combined multiplier (product of all three factors)
    pub fn total(&self) -> f64 {
        self.salinity * self.temperature * self.vibration
    }
}

impl MarineEnvironment {
    /// All environments for UI selection and comparisons
    pub const ALL: [MarineEnvironment; 5] = [
        MarineEnvironment::Coastal,
        MarineEnvironment::Offshore,
        MarineEnvironment::DeepSea,
        MarineEnvironment::Arctic,
        MarineEnvironment::Tropical,
    ];

    /// Environmental correction factors for this regime
    pub fn correction_factors(&self) -> EnvironmentalFactors {
        let (salinity, temperature, vibration) = match self {
            MarineEnvironment::Coastal => (1.15, 1.05, 1.05),
            MarineEnvironment::Offshore => (1.20, 1.08, 1.10),
            MarineEnvironment::DeepSea => (1.10, 1.15, 1.08),
            MarineEnvironment::Arctic => (1.05, 1.20, 1.15),
            MarineEnvironment::Tropical => (1.25, 1.25, 1.12),
        };
        EnvironmentalFactors {
            salinity,
            temperature,
            vibration,
        }
    }

    /// Machine-readable code (matches the JSON representation)
    pub fn code(&self) -> &'static str {
        match self {
            MarineEnvironment::Coastal => "COASTAL",
            MarineEnvironment::Offshore => "OFFSHORE",
            MarineEnvironment::DeepSea => "DEEP_SEA",
            MarineEnvironment::Arctic => "ARCTIC",
            MarineEnvironment::Tropical => "TROPICAL",
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            MarineEnvironment::Coastal => "Coastal",
            MarineEnvironment::Offshore => "Offshore",
            MarineEnvironment::DeepSea => "Deep sea",
            MarineEnvironment::Arctic => "Arctic",
            MarineEnvironment::Tropical => "Tropical",
        }
    }
}

impl std::fmt::Display for MarineEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MarineEnvironment {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        MarineEnvironment::ALL
            .into_iter()
            .find(|env| env.code() == normalized)
            .ok_or_else(|| {
                SizingError::invalid_input(
                    "environment",
                    s,
                    "Expected one of COASTAL, OFFSHORE, DEEP_SEA, ARCTIC, TROPICAL",
                )
            })
    }
}

// ============================================================================
// Classification Society
// ============================================================================

/// Maritime classification society whose rules govern the design torque.
///
/// Unrecognized society codes deserialize to [`ClassificationSociety::Other`]
/// and receive [`DEFAULT_CLASSIFICATION_SAFETY_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ClassificationSociety {
    /// Det Norske Veritas
    #[default]
    Dnv,
    /// American Bureau of Shipping
    Abs,
    /// Korean Register
    Kr,
    /// Bureau Veritas
    Bv,
    /// Lloyd's Register
    Lr,
    /// Any society without a table entry
    Other,
}

impl ClassificationSociety {
    /// Societies with a tabulated safety factor
    pub const LISTED: [ClassificationSociety; 5] = [
        ClassificationSociety::Dnv,
        ClassificationSociety::Abs,
        ClassificationSociety::Kr,
        ClassificationSociety::Bv,
        ClassificationSociety::Lr,
    ];

    /// Rule safety factor on mechanical design torque
    pub fn safety_factor(&self) -> f64 {
        match self {
            ClassificationSociety::Dnv => 2.0,
            ClassificationSociety::Abs => 2.2,
            ClassificationSociety::Kr => 2.0,
            ClassificationSociety::Bv => 2.0,
            ClassificationSociety::Lr => 2.0,
            ClassificationSociety::Other => DEFAULT_CLASSIFICATION_SAFETY_FACTOR,
        }
    }

    /// Society code as written on class certificates
    pub fn code(&self) -> &'static str {
        match self {
            ClassificationSociety::Dnv => "DNV",
            ClassificationSociety::Abs => "ABS",
            ClassificationSociety::Kr => "KR",
            ClassificationSociety::Bv => "BV",
            ClassificationSociety::Lr => "LR",
            ClassificationSociety::Other => "OTHER",
        }
    }

    /// Map a society code to a variant; unknown codes map to `Other`
    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().to_ascii_uppercase();
        ClassificationSociety::LISTED
            .into_iter()
            .find(|society| society.code() == normalized)
            .unwrap_or(ClassificationSociety::Other)
    }
}

impl std::fmt::Display for ClassificationSociety {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ClassificationSociety {
    type Err = SizingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ClassificationSociety::from_code(s))
    }
}

impl From<String> for ClassificationSociety {
    fn from(code: String) -> Self {
        ClassificationSociety::from_code(&code)
    }
}

impl From<ClassificationSociety> for String {
    fn from(society: ClassificationSociety) -> Self {
        society.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_offshore_factors() {
        let factors = MarineEnvironment::Offshore.correction_factors();
        assert_eq!(factors.salinity, 1.20);
        assert_eq!(factors.temperature, 1.08);
        assert_eq!(factors.vibration, 1.10);
        assert_relative_eq!(factors.total(), 1.4256, max_relative = 1e-12);
    }

    #[test]
    fn test_every_environment_increases_torque() {
        for env in MarineEnvironment::ALL {
            let factors = env.correction_factors();
            assert!(factors.salinity > 1.0, "{env}");
            assert!(factors.temperature > 1.0, "{env}");
            assert!(factors.vibration > 1.0, "{env}");
            assert!(factors.total() > 1.0, "{env}");
        }
    }

    #[test]
    fn test_classification_factors() {
        assert_eq!(ClassificationSociety::Dnv.safety_factor(), 2.0);
        assert_eq!(ClassificationSociety::Abs.safety_factor(), 2.2);
        assert_eq!(ClassificationSociety::Kr.safety_factor(), 2.0);
        assert_eq!(
            ClassificationSociety::Other.safety_factor(),
            DEFAULT_CLASSIFICATION_SAFETY_FACTOR
        );
    }

    #[test]
    fn test_unknown_society_gets_default() {
        let society: ClassificationSociety = serde_json::from_str("\"RINA\"").unwrap();
        assert_eq!(society, ClassificationSociety::Other);
        assert_eq!(society.safety_factor(), 2.0);

        let abs: ClassificationSociety = serde_json::from_str("\"abs\"").unwrap();
        assert_eq!(abs, ClassificationSociety::Abs);
        assert_eq!(serde_json::to_string(&abs).unwrap(), "\"ABS\"");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("deep-sea".parse::<MarineEnvironment>().unwrap(), MarineEnvironment::DeepSea);
        assert_eq!("OFFSHORE".parse::<MarineEnvironment>().unwrap(), MarineEnvironment::Offshore);
        assert!("lake".parse::<MarineEnvironment>().is_err());

        let json = serde_json::to_string(&MarineEnvironment::DeepSea).unwrap();
        assert_eq!(json, "\"DEEP_SEA\"");
    }
}
