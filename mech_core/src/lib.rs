//! # mech_core - Mechanical Engineering Calculation Engine
//!
//! `mech_core` turns physical inputs (force, area, material, beam geometry)
//! into stress, safety-factor and deflection results, each with an ordered
//! list of human-readable derivation steps for teaching use.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Deterministic**: Same input, bit-identical output, from any thread
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Fail fast on bad numbers**: Division by a zero or negative dimension is
//!   an error, never `Infinity`/`NaN`
//!
//! ## Quick Start
//!
//! ```rust
//! use mech_core::calculations::stress::{calculate, StressAnalysisInput};
//!
//! let result = calculate(&StressAnalysisInput {
//!     force_n: 1000.0,
//!     area_mm2: 100.0,
//!     material: "Steel (A36)".to_string(),
//!     load_type: "Tensile Load".to_string(),
//! }).unwrap();
//!
//! for step in &result.steps {
//!     println!("{}", step);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Stress analysis and beam deflection
//! - [`materials`] - Static material property table
//! - [`history`] - Saved calculation records, search and statistics
//! - [`units`] - Type-safe SI unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod history;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutcome, SafetyStatus};
pub use errors::{CalcError, CalcResult};
pub use history::{CalculationHistory, CalculationRecord};
pub use materials::MaterialProperties;
