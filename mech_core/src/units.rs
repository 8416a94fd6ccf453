//! # Unit Types
//!
//! Type-safe wrappers for the SI units used by the calculators. Inputs arrive
//! in the units engineers type into a form (mm, mm², mm⁴, GPa) and the
//! closed-form equations are evaluated in base SI (m, m², m⁴, Pa).
//!
//! Every conversion is a single multiply or divide by a power of ten, applied
//! in the same direction the hand calculation does it, so results are
//! reproducible bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::units::{Millimeters, Meters, SqMm, SqM};
//!
//! let length: Meters = Millimeters(1500.0).into();
//! assert_eq!(length.0, 1.5);
//!
//! let area: SqM = SqMm(100.0).into();
//! assert_eq!(area.0, 100.0 / 1_000_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Div;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqMm> for SqM {
    fn from(mm2: SqMm) -> Self {
        SqM(mm2.0 / 1_000_000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl Div<SqM> for Newtons {
    type Output = Pascals;
    fn div(self, rhs: SqM) -> Pascals {
        Pascals(self.0 / rhs.0)
    }
}

// ============================================================================
// Stress / Modulus Units
// ============================================================================

/// Stress in pascals (N/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1_000_000.0)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1e9)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Moment of inertia in mm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm4(pub f64);

/// Moment of inertia in m⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

impl From<Mm4> for M4 {
    fn from(mm4: Mm4) -> Self {
        M4(mm4.0 / 1e12)
    }
}

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(Millimeters);
impl_value!(Meters);
impl_value!(SqMm);
impl_value!(SqM);
impl_value!(Newtons);
impl_value!(Pascals);
impl_value!(Megapascals);
impl_value!(Gigapascals);
impl_value!(Mm4);
impl_value!(M4);
