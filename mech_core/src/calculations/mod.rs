//! # Engineering Calculations
//!
//! This module contains all calculation scenarios. Each one follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results with derivation steps (JSON-serializable)
//! - `calculate(input) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`stress`] - Axial stress and safety factor against yield
//! - [`deflection`] - Point-loaded beam deflection for three support conditions
//!
//! ## Status Classification
//!
//! Both scenarios grade the full-precision safety factor (before the
//! 2-decimal rounding applied to the reported value) the same way:
//!
//! | Safety factor | Status |
//! |---|---|
//! | > 4 | `safe` |
//! | > 2 and ≤ 4 | `warning` |
//! | ≤ 2 | `danger` |

pub mod deflection;
pub mod stress;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use deflection::{BeamDeflectionInput, BeamDeflectionResult, SupportType};
pub use stress::{StressAnalysisInput, StressAnalysisResult};

/// Safety factor above which a member is considered safe.
pub const SAFE_THRESHOLD: f64 = 4.0;

/// Safety factor above which a member is only a warning (not danger).
pub const WARNING_THRESHOLD: f64 = 2.0;

/// Risk grade derived from a safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyStatus {
    Safe,
    Warning,
    Danger,
}

impl SafetyStatus {
    /// Classify a safety factor. Both thresholds are strict: exactly 4.0 is a
    /// warning and exactly 2.0 is danger.
    pub fn from_safety_factor(safety_factor: f64) -> Self {
        if safety_factor > SAFE_THRESHOLD {
            SafetyStatus::Safe
        } else if safety_factor > WARNING_THRESHOLD {
            SafetyStatus::Warning
        } else {
            SafetyStatus::Danger
        }
    }

    /// Lowercase tag, same as the JSON form
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyStatus::Safe => "safe",
            SafetyStatus::Warning => "warning",
            SafetyStatus::Danger => "danger",
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to a fixed number of decimal places.
///
/// Non-finite values pass through untouched.
pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Scientific notation with `digits` fractional digits and an explicitly
/// signed exponent (`1.000e-4`, `2.000e+0`).
pub fn to_exponential(value: f64, digits: usize) -> String {
    let formatted = format!("{:.*e}", digits, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Serde adapter for a safety factor that may be unbounded.
///
/// JSON has no infinity, so `f64::INFINITY` is written as `null` and read back.
pub(crate) mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Enum wrapper for all calculation inputs.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationItem {
    /// Axial stress analysis
    StressAnalysis(StressAnalysisInput),
    /// Beam deflection under a point load
    BeamDeflection(BeamDeflectionInput),
}

impl CalculationItem {
    /// Get the calculation type tag (e.g., "stress_analysis")
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::StressAnalysis(_) => "stress_analysis",
            CalculationItem::BeamDeflection(_) => "beam_deflection",
        }
    }

    /// Human-readable calculation type
    pub fn type_label(&self) -> &'static str {
        match self {
            CalculationItem::StressAnalysis(_) => "Stress Analysis",
            CalculationItem::BeamDeflection(_) => "Beam Deflection",
        }
    }

    /// Material name, for calculations that take one
    pub fn material(&self) -> Option<&str> {
        match self {
            CalculationItem::StressAnalysis(input) => Some(&input.material),
            CalculationItem::BeamDeflection(_) => None,
        }
    }

    /// Run the matching calculation.
    pub fn run(&self) -> CalcResult<CalculationOutcome> {
        match self {
            CalculationItem::StressAnalysis(input) => {
                stress::calculate(input).map(CalculationOutcome::StressAnalysis)
            }
            CalculationItem::BeamDeflection(input) => {
                deflection::calculate(input).map(CalculationOutcome::BeamDeflection)
            }
        }
    }
}

/// Enum wrapper for all calculation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationOutcome {
    StressAnalysis(StressAnalysisResult),
    BeamDeflection(BeamDeflectionResult),
}

impl CalculationOutcome {
    /// Risk status of the result
    pub fn status(&self) -> SafetyStatus {
        match self {
            CalculationOutcome::StressAnalysis(r) => r.status,
            CalculationOutcome::BeamDeflection(r) => r.status,
        }
    }

    /// Reported (rounded) safety factor
    pub fn safety_factor(&self) -> f64 {
        match self {
            CalculationOutcome::StressAnalysis(r) => r.safety_factor,
            CalculationOutcome::BeamDeflection(r) => r.safety_factor,
        }
    }

    /// Derivation steps, in order
    pub fn steps(&self) -> &[String] {
        match self {
            CalculationOutcome::StressAnalysis(r) => &r.steps,
            CalculationOutcome::BeamDeflection(r) => &r.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(SafetyStatus::from_safety_factor(25.0), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::from_safety_factor(4.01), SafetyStatus::Safe);
        assert_eq!(SafetyStatus::from_safety_factor(4.0), SafetyStatus::Warning);
        assert_eq!(SafetyStatus::from_safety_factor(2.01), SafetyStatus::Warning);
        assert_eq!(SafetyStatus::from_safety_factor(2.0), SafetyStatus::Danger);
        assert_eq!(SafetyStatus::from_safety_factor(0.5), SafetyStatus::Danger);
        assert_eq!(SafetyStatus::from_safety_factor(f64::INFINITY), SafetyStatus::Safe);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&SafetyStatus::Warning).unwrap(), "\"warning\"");
        let parsed: SafetyStatus = serde_json::from_str("\"danger\"").unwrap();
        assert_eq!(parsed, SafetyStatus::Danger);
        assert_eq!(SafetyStatus::Safe.to_string(), "safe");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(10.004, 2), 10.0);
        assert_eq!(round_to(0.10416666, 3), 0.104);
        assert_eq!(round_to(3.999999999, 2), 4.0);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(0.0001, 3), "1.000e-4");
        assert_eq!(to_exponential(2.0, 3), "2.000e+0");
        assert_eq!(to_exponential(12345.0, 3), "1.235e+4");
    }

    #[test]
    fn test_item_dispatch() {
        let item = CalculationItem::StressAnalysis(StressAnalysisInput {
            force_n: 1000.0,
            area_mm2: 100.0,
            material: "Steel (A36)".to_string(),
            load_type: "Tensile Load".to_string(),
        });
        assert_eq!(item.calc_type(), "stress_analysis");
        assert_eq!(item.material(), Some("Steel (A36)"));

        let outcome = item.run().unwrap();
        assert_eq!(outcome.status(), SafetyStatus::Safe);
        assert_eq!(outcome.safety_factor(), 25.0);
        assert_eq!(outcome.steps().len(), 7);
    }

    #[test]
    fn test_item_serialization() {
        let item = CalculationItem::BeamDeflection(BeamDeflectionInput {
            length_mm: 1000.0,
            load_n: 1000.0,
            moment_of_inertia_mm4: 1e6,
            elastic_modulus_gpa: 200.0,
            support_type: SupportType::Cantilever,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"beam_deflection\""));
        assert!(json.contains("\"support_type\":\"cantilever\""));
        let parsed: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
