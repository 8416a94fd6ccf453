//! # Materials Database
//!
//! Static reference properties for the engineering materials offered by the
//! calculators. The table is built once on first use and never mutated, so it
//! can be read from any number of threads without coordination.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::materials;
//!
//! let steel = materials::lookup("Steel (A36)").unwrap();
//! assert_eq!(steel.yield_strength_mpa, 250.0);
//! assert_eq!(steel.elastic_modulus_gpa, 200.0);
//!
//! // Unknown names fall back to the default yield strength
//! assert_eq!(materials::yield_strength_or_default("Unobtainium"), 250.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Yield strength (MPa) assumed when a material is not in the table.
pub const DEFAULT_YIELD_STRENGTH_MPA: f64 = 250.0;

/// Reference properties for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Display name, unique key in the table (e.g., "Steel (A36)")
    pub name: String,
    /// Yield strength (MPa)
    pub yield_strength_mpa: f64,
    /// Modulus of elasticity (GPa)
    pub elastic_modulus_gpa: f64,
}

impl MaterialProperties {
    fn new(name: &str, yield_strength_mpa: f64, elastic_modulus_gpa: f64) -> Self {
        MaterialProperties {
            name: name.to_string(),
            yield_strength_mpa,
            elastic_modulus_gpa,
        }
    }
}

impl std::fmt::Display for MaterialProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (Fy = {} MPa, E = {} GPa)",
            self.name, self.yield_strength_mpa, self.elastic_modulus_gpa
        )
    }
}

static MATERIAL_TABLE: Lazy<HashMap<String, MaterialProperties>> = Lazy::new(|| {
    [
        MaterialProperties::new("Steel (A36)", 250.0, 200.0),
        MaterialProperties::new("Aluminum (6061-T6)", 270.0, 70.0),
        MaterialProperties::new("Stainless Steel (304)", 215.0, 200.0),
    ]
    .into_iter()
    .map(|props| (props.name.clone(), props))
    .collect()
});

/// Look up a material by its exact name.
pub fn lookup(name: &str) -> Option<&'static MaterialProperties> {
    MATERIAL_TABLE.get(name)
}

/// Look up a material, failing with `MaterialNotFound` if it is absent.
///
/// The calculators never call this; they fall back to
/// [`DEFAULT_YIELD_STRENGTH_MPA`] instead.
pub fn require(name: &str) -> CalcResult<&'static MaterialProperties> {
    lookup(name).ok_or_else(|| CalcError::material_not_found(name))
}

/// Yield strength for `name`, or [`DEFAULT_YIELD_STRENGTH_MPA`] if unknown.
pub fn yield_strength_or_default(name: &str) -> f64 {
    match lookup(name) {
        Some(props) => props.yield_strength_mpa,
        None => {
            log::warn!(
                "unknown material '{}', assuming yield strength {} MPa",
                name,
                DEFAULT_YIELD_STRENGTH_MPA
            );
            DEFAULT_YIELD_STRENGTH_MPA
        }
    }
}

/// All materials, sorted by name.
pub fn all() -> Vec<&'static MaterialProperties> {
    let mut materials: Vec<_> = MATERIAL_TABLE.values().collect();
    materials.sort_by(|a, b| a.name.cmp(&b.name));
    materials
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_materials() {
        let steel = lookup("Steel (A36)").unwrap();
        assert_eq!(steel.yield_strength_mpa, 250.0);
        assert_eq!(steel.elastic_modulus_gpa, 200.0);

        let aluminum = lookup("Aluminum (6061-T6)").unwrap();
        assert_eq!(aluminum.yield_strength_mpa, 270.0);
        assert_eq!(aluminum.elastic_modulus_gpa, 70.0);

        let stainless = lookup("Stainless Steel (304)").unwrap();
        assert_eq!(stainless.yield_strength_mpa, 215.0);
        assert_eq!(stainless.elastic_modulus_gpa, 200.0);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("steel (a36)").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_default_yield_strength() {
        assert_eq!(yield_strength_or_default("Unobtainium"), DEFAULT_YIELD_STRENGTH_MPA);
        assert_eq!(yield_strength_or_default("Aluminum (6061-T6)"), 270.0);
    }

    #[test]
    fn test_require() {
        assert!(require("Steel (A36)").is_ok());
        let err = require("Unobtainium").unwrap_err();
        assert_eq!(err, CalcError::material_not_found("Unobtainium"));
    }

    #[test]
    fn test_all_sorted() {
        let names: Vec<_> = all().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Aluminum (6061-T6)", "Stainless Steel (304)", "Steel (A36)"]
        );
    }

    #[test]
    fn test_display() {
        let steel = lookup("Steel (A36)").unwrap();
        assert_eq!(steel.to_string(), "Steel (A36) (Fy = 250 MPa, E = 200 GPa)");
    }

    #[test]
    fn test_material_serialization() {
        let steel = lookup("Steel (A36)").unwrap();
        let json = serde_json::to_string(steel).unwrap();
        assert!(json.contains("\"yield_strength_mpa\":250.0"));
        let parsed: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, steel);
    }
}
