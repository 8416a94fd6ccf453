//! # Axial Stress Analysis
//!
//! Normal stress in a member under an axial force, checked against the yield
//! strength of its material.
//!
//! ## Method
//!
//! - σ = F / A, evaluated in SI (N / m² = Pa) and reported in MPa
//! - Safety factor = Fy / σ
//! - Materials missing from the table use Fy = 250 MPa
//!
//! ## Example
//!
//! ```rust
//! use mech_core::calculations::stress::{StressAnalysisInput, calculate};
//! use mech_core::calculations::SafetyStatus;
//!
//! let input = StressAnalysisInput {
//!     force_n: 1000.0,
//!     area_mm2: 100.0,
//!     material: "Steel (A36)".to_string(),
//!     load_type: "Tensile Load".to_string(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.stress_mpa, 10.0);
//! assert_eq!(result.safety_factor, 25.0);
//! assert_eq!(result.status, SafetyStatus::Safe);
//! ```

use serde::{Deserialize, Serialize};

use super::{round_to, to_exponential, unbounded, SafetyStatus};
use crate::errors::{require_positive, require_representable, CalcResult};
use crate::materials;
use crate::units::{Megapascals, Newtons, SqM, SqMm};

/// Input parameters for an axial stress analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "force_n": 1000.0,
///   "area_mm2": 100.0,
///   "material": "Steel (A36)",
///   "load_type": "Tensile Load"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAnalysisInput {
    /// Applied force (N), must be positive
    pub force_n: f64,

    /// Cross-sectional area (mm²), must be positive
    pub area_mm2: f64,

    /// Material name as listed in the materials table
    pub material: String,

    /// Descriptive load type (e.g., "Tensile Load"). Does not change the formula.
    pub load_type: String,
}

impl StressAnalysisInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("force_n", self.force_n)?;
        require_positive("area_mm2", self.area_mm2)?;
        Ok(())
    }
}

/// Results from a stress analysis.
///
/// `stress_mpa` and `safety_factor` are rounded to 2 decimals; `status` is
/// graded from the full-precision safety factor before rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAnalysisResult {
    /// Normal stress σ (MPa)
    pub stress_mpa: f64,

    /// Fy / σ
    #[serde(with = "unbounded")]
    pub safety_factor: f64,

    pub status: SafetyStatus,

    /// Derivation, one line per arithmetic stage
    pub steps: Vec<String>,

    /// Area converted to m² (unrounded)
    pub area_m2: f64,

    /// Yield strength used (MPa), the table value or the default
    pub yield_strength_mpa: f64,
}

/// Calculate axial stress and safety factor.
///
/// # Returns
///
/// * `Ok(StressAnalysisResult)` - Stress, safety factor, status and steps
/// * `Err(CalcError::InvalidInput)` - Force or area is not a positive number,
///   or their ratio overflows
pub fn calculate(input: &StressAnalysisInput) -> CalcResult<StressAnalysisResult> {
    input.validate()?;

    let area_m2: SqM = SqMm(input.area_mm2).into();
    let stress: Megapascals = (Newtons(input.force_n) / area_m2).into();

    require_representable("force_n / area_mm2", stress.value(), false)?;

    let yield_strength_mpa = materials::yield_strength_or_default(&input.material);
    let safety_factor = yield_strength_mpa / stress.value();
    let status = SafetyStatus::from_safety_factor(safety_factor);

    let stress_mpa = round_to(stress.value(), 2);
    let safety_factor = round_to(safety_factor, 2);

    log::debug!(
        "stress analysis: F={} N, A={} mm², material='{}' -> σ={} MPa, SF={}, {}",
        input.force_n,
        input.area_mm2,
        input.material,
        stress_mpa,
        safety_factor,
        status
    );

    let steps = vec![
        "σ = F / A".to_string(),
        format!("σ = {} N / {} mm²", input.force_n, input.area_mm2),
        format!("σ = {} N / {} m²", input.force_n, to_exponential(area_m2.value(), 3)),
        format!("σ = {:.2} MPa", stress_mpa),
        "Safety Factor = Yield Strength / Stress".to_string(),
        format!("Safety Factor = {} MPa / {:.2} MPa", yield_strength_mpa, stress_mpa),
        format!("Safety Factor = {:.2}", safety_factor),
    ];

    Ok(StressAnalysisResult {
        stress_mpa,
        safety_factor,
        status,
        steps,
        area_m2: area_m2.value(),
        yield_strength_mpa,
    })
}
