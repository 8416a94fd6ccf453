//! # Beam Deflection
//!
//! Maximum deflection and bending stress of a prismatic beam carrying a single
//! point load, for three support conditions.
//!
//! ## Assumptions
//!
//! - Point load at midspan (simply supported, fixed both ends) or at the free
//!   end (cantilever)
//! - Linear elastic material, small deflections
//! - Yield strength fixed at 250 MPa; this scenario takes no material input
//!
//! ## Formulas
//!
//! | Support | δ_max | σ_max |
//! |---|---|---|
//! | Simply supported | PL³/(48EI) | PL/(4I) |
//! | Cantilever | PL³/(3EI) | PL/I |
//! | Fixed both ends | PL³/(192EI) | PL/(8I) |
//!
//! Deflection is evaluated in SI (m, Pa, m⁴). The stress term uses
//! I = I_mm⁴ / 10⁶ with L in meters, and the result is divided by 10⁶ to
//! report MPa. Stored results depend on this mixed-unit convention.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::calculations::deflection::{BeamDeflectionInput, SupportType, calculate};
//!
//! let input = BeamDeflectionInput {
//!     length_mm: 1000.0,
//!     load_n: 1000.0,
//!     moment_of_inertia_mm4: 1e6,
//!     elastic_modulus_gpa: 200.0,
//!     support_type: SupportType::SimplySupported,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.max_deflection_mm, 0.104);
//! ```

use serde::{Deserialize, Serialize};

use super::{round_to, unbounded, SafetyStatus};
use crate::errors::{require_finite, require_positive, require_representable, CalcResult};
use crate::units::{Gigapascals, Megapascals, Meters, Millimeters, Mm4, Pascals, M4};

/// Yield strength (MPa) assumed for every beam.
pub const BEAM_YIELD_STRENGTH_MPA: f64 = 250.0;

/// Beam boundary condition.
///
/// Serializes as its snake_case tag. Any other string deserializes to
/// [`SupportType::Unrecognized`], which produces a zero-valued result instead
/// of an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SupportType {
    /// Pin at one end, roller at the other
    SimplySupported,
    /// Fixed at one end, free at the other
    Cantilever,
    /// Fixed at both ends
    FixedBothEnds,
    /// Anything else; the original tag is preserved
    Unrecognized(String),
}

impl SupportType {
    /// All recognized support types
    pub const ALL: [SupportType; 3] = [
        SupportType::SimplySupported,
        SupportType::Cantilever,
        SupportType::FixedBothEnds,
    ];

    /// snake_case tag (e.g., "fixed_both_ends")
    pub fn as_str(&self) -> &str {
        match self {
            SupportType::SimplySupported => "simply_supported",
            SupportType::Cantilever => "cantilever",
            SupportType::FixedBothEnds => "fixed_both_ends",
            SupportType::Unrecognized(tag) => tag,
        }
    }

    /// Tag with underscores shown as spaces (e.g., "fixed both ends")
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// (deflection denominator, stress denominator), or `None` if unrecognized
    fn coefficients(&self) -> Option<(f64, f64)> {
        match self {
            SupportType::SimplySupported => Some((48.0, 4.0)),
            SupportType::Cantilever => Some((3.0, 1.0)),
            SupportType::FixedBothEnds => Some((192.0, 8.0)),
            SupportType::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for SupportType {
    fn from(tag: &str) -> Self {
        match tag {
            "simply_supported" => SupportType::SimplySupported,
            "cantilever" => SupportType::Cantilever,
            "fixed_both_ends" => SupportType::FixedBothEnds,
            other => SupportType::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SupportType {
    fn from(tag: String) -> Self {
        SupportType::from(tag.as_str())
    }
}

impl From<SupportType> for String {
    fn from(support: SupportType) -> Self {
        match support {
            SupportType::Unrecognized(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for SupportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Input parameters for a beam deflection calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_mm": 1000.0,
///   "load_n": 1000.0,
///   "moment_of_inertia_mm4": 1000000.0,
///   "elastic_modulus_gpa": 200.0,
///   "support_type": "simply_supported"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDeflectionInput {
    /// Span (mm)
    pub length_mm: f64,

    /// Point load (N)
    pub load_n: f64,

    /// Second moment of area (mm⁴)
    pub moment_of_inertia_mm4: f64,

    /// Modulus of elasticity (GPa)
    pub elastic_modulus_gpa: f64,

    pub support_type: SupportType,
}

impl BeamDeflectionInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("length_mm", self.length_mm)?;
        require_positive("moment_of_inertia_mm4", self.moment_of_inertia_mm4)?;
        require_positive("elastic_modulus_gpa", self.elastic_modulus_gpa)?;
        require_finite("load_n", self.load_n)?;
        Ok(())
    }
}

/// Results from a beam deflection calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDeflectionResult {
    /// Maximum deflection (mm), 3 decimals
    pub max_deflection_mm: f64,

    /// Maximum bending stress (MPa), 2 decimals
    pub max_stress_mpa: f64,

    /// 250 MPa / σ_max, 2 decimals. Unbounded (`null` in JSON) when σ_max is zero.
    /// `status` is graded from the unrounded value.
    #[serde(with = "unbounded")]
    pub safety_factor: f64,

    pub status: SafetyStatus,

    pub steps: Vec<String>,
}

/// Calculate beam deflection, bending stress and safety factor.
///
/// An unrecognized support type is not an error: deflection and stress are
/// reported as zero, the safety factor as unbounded and the status as
/// `danger`, since nothing about the beam was actually checked.
///
/// # Returns
///
/// * `Ok(BeamDeflectionResult)` - Results with derivation steps
/// * `Err(CalcError::InvalidInput)` - Length, inertia or modulus not positive,
///   load not finite, or a result that overflows
///
/// A negative load gives a negative stress and safety factor, graded `danger`.
pub fn calculate(input: &BeamDeflectionInput) -> CalcResult<BeamDeflectionResult> {
    input.validate()?;

    let length: Meters = Millimeters(input.length_mm).into();
    let e: Pascals = Gigapascals(input.elastic_modulus_gpa).into();
    let i: M4 = Mm4(input.moment_of_inertia_mm4).into();
    let i_stress = input.moment_of_inertia_mm4 / 1e6;
    let p = input.load_n;
    let l = length.value();

    let (deflection_m, stress_pa) = match input.support_type.coefficients() {
        Some((k_deflection, k_stress)) => (
            p * l.powi(3) / (k_deflection * e.value() * i.value()),
            p * l / (k_stress * i_stress),
        ),
        None => {
            log::warn!(
                "unrecognized support type '{}', reporting zero deflection and stress",
                input.support_type.as_str()
            );
            (0.0, 0.0)
        }
    };

    let deflection: Millimeters = Meters(deflection_m).into();
    let stress: Megapascals = Pascals(stress_pa).into();
    require_representable("length_mm / load_n / moment_of_inertia_mm4", deflection.value(), true)?;
    require_representable("length_mm / load_n / moment_of_inertia_mm4", stress.value(), true)?;

    let max_deflection_mm = round_to(deflection.value(), 3);
    let max_stress_mpa = round_to(stress.value(), 2);

    let recognized = input.support_type.coefficients().is_some();
    let (safety_factor, status) = if recognized {
        if stress.value() == 0.0 {
            (f64::INFINITY, SafetyStatus::Safe)
        } else {
            let sf = BEAM_YIELD_STRENGTH_MPA / stress.value();
            (round_to(sf, 2), SafetyStatus::from_safety_factor(sf))
        }
    } else {
        (f64::INFINITY, SafetyStatus::Danger)
    };

    log::debug!(
        "beam deflection: {} L={} mm P={} N -> δ={} mm, σ={} MPa, SF={}, {}",
        input.support_type.as_str(),
        input.length_mm,
        input.load_n,
        max_deflection_mm,
        max_stress_mpa,
        safety_factor,
        status
    );

    let safety_step = if safety_factor.is_finite() {
        format!("Safety Factor = {:.2}", safety_factor)
    } else if recognized {
        "Safety Factor = unbounded (zero stress)".to_string()
    } else {
        "Safety Factor = undefined (unrecognized support type)".to_string()
    };

    let steps = vec![
        format!("Beam Type: {}", input.support_type.display_name()),
        format!("Length: {} mm = {:.3} m", input.length_mm, l),
        format!("Load: {} N", input.load_n),
        format!("Elastic Modulus: {} GPa", input.elastic_modulus_gpa),
        format!("Moment of Inertia: {} mm⁴", input.moment_of_inertia_mm4),
        format!("Max Deflection = {:.3} mm", max_deflection_mm),
        format!("Max Stress = {:.2} MPa", max_stress_mpa),
        safety_step,
    ];

    Ok(BeamDeflectionResult {
        max_deflection_mm,
        max_stress_mpa,
        safety_factor,
        status,
        steps,
    })
}
