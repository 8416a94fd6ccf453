//! # Calculation History
//!
//! A user's saved calculations. `CalculationHistory` is a plain serializable
//! value; storing it (database, file, API) is up to the caller.
//!
//! ## Structure
//!
//! ```text
//! CalculationHistory
//! ├── meta: HistoryMetadata (version, owner, timestamps)
//! └── records: HashMap<Uuid, CalculationRecord>
//!     ├── calc_type, name, description, material
//!     ├── inputs: CalculationItem
//!     ├── results: CalculationOutcome
//!     └── created_at
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mech_core::history::CalculationHistory;
//! use mech_core::calculations::{CalculationItem, StressAnalysisInput};
//!
//! let mut history = CalculationHistory::new("student01");
//!
//! let id = history.record(CalculationItem::StressAnalysis(StressAnalysisInput {
//!     force_n: 1000.0,
//!     area_mm2: 100.0,
//!     material: "Steel (A36)".to_string(),
//!     load_type: "Tensile Load".to_string(),
//! })).unwrap();
//!
//! assert_eq!(history.get(&id).unwrap().name, "Stress Analysis - Steel (A36)");
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, CalculationOutcome, SafetyStatus};
use crate::errors::CalcResult;

/// Current schema version for serialized histories
pub const SCHEMA_VERSION: &str = "0.1.0";

/// One saved calculation: what was entered and what came out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: Uuid,

    /// Calculation type tag (e.g., "stress_analysis")
    pub calc_type: String,

    /// Display name (e.g., "Stress Analysis - Steel (A36)")
    pub name: String,

    pub description: String,

    /// Material name, for calculations that take one
    pub material: Option<String>,

    pub inputs: CalculationItem,

    pub results: CalculationOutcome,

    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Run `inputs` and wrap the outcome in a new record with a default name
    /// and description.
    pub fn from_item(inputs: CalculationItem) -> CalcResult<Self> {
        let results = inputs.run()?;
        let (name, description) = match &inputs {
            CalculationItem::StressAnalysis(input) => (
                format!("{} - {}", inputs.type_label(), input.material),
                format!("{} calculation", input.load_type),
            ),
            CalculationItem::BeamDeflection(input) => (
                format!("{} - {}", inputs.type_label(), input.support_type.display_name()),
                format!("{} beam calculation", input.support_type.display_name()),
            ),
        };

        Ok(CalculationRecord {
            id: Uuid::new_v4(),
            calc_type: inputs.calc_type().to_string(),
            name,
            description,
            material: inputs.material().map(str::to_string),
            inputs,
            results,
            created_at: Utc::now(),
        })
    }

    /// Override the default name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the default description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Case-insensitive match on name, type or material
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.calc_type.to_lowercase().contains(&term)
            || self
                .material
                .as_deref()
                .is_some_and(|m| m.to_lowercase().contains(&term))
    }
}

/// Root history container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationHistory {
    pub meta: HistoryMetadata,

    /// All records, keyed by UUID
    pub records: HashMap<Uuid, CalculationRecord>,
}

impl CalculationHistory {
    /// Create an empty history for `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        let now = Utc::now();
        CalculationHistory {
            meta: HistoryMetadata {
                version: SCHEMA_VERSION.to_string(),
                owner: owner.into(),
                created: now,
                modified: now,
            },
            records: HashMap::new(),
        }
    }

    /// Run a calculation and save it under a default name.
    ///
    /// Invalid input is returned as an error and nothing is saved.
    pub fn record(&mut self, item: CalculationItem) -> CalcResult<Uuid> {
        let record = CalculationRecord::from_item(item)?;
        Ok(self.add_record(record))
    }

    /// Save an already-built record. Returns its id.
    pub fn add_record(&mut self, record: CalculationRecord) -> Uuid {
        let id = record.id;
        log::debug!("saving {} record '{}' ({})", record.calc_type, record.name, id);
        self.records.insert(id, record);
        self.touch();
        id
    }

    /// Remove a record by UUID.
    pub fn remove(&mut self, id: &Uuid) -> Option<CalculationRecord> {
        let record = self.records.remove(id);
        if record.is_some() {
            self.touch();
        }
        record
    }

    /// Get a record by UUID.
    pub fn get(&self, id: &Uuid) -> Option<&CalculationRecord> {
        self.records.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Up to `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&CalculationRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));
        records.truncate(limit);
        records
    }

    /// Records whose name, type or material contains `term`, newest first.
    ///
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&CalculationRecord> {
        let mut records: Vec<_> = self.records.values().filter(|r| r.matches(term)).collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));
        records
    }

    /// Summary counts as of `now`.
    pub fn stats(&self, now: DateTime<Utc>) -> HistoryStats {
        let week_start = now - Duration::days(7);
        let mut stats = HistoryStats {
            total_calculations: self.records.len(),
            ..HistoryStats::default()
        };

        for record in self.records.values() {
            if record.created_at > week_start && record.created_at <= now {
                stats.this_week += 1;
            }
            match record.results.status() {
                SafetyStatus::Safe => stats.safe += 1,
                SafetyStatus::Warning => stats.warning += 1,
                SafetyStatus::Danger => stats.danger += 1,
            }
        }
        stats
    }
}

impl Default for CalculationHistory {
    fn default() -> Self {
        CalculationHistory::new("")
    }
}

/// History metadata stored in the header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Who the history belongs to
    pub owner: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Dashboard counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_calculations: usize,
    /// Records created in the 7 days up to the reference time
    pub this_week: usize,
    pub safe: usize,
    pub warning: usize,
    pub danger: usize,
}
