//! Solved-model data types
//!
//! The optimization model itself (formulation and solving) lives outside
//! this workspace. What arrives here is a solution dump: the solved value
//! of every placement decision variable, per-tier storage metadata, and a
//! solver summary. `SolvedModel` is the serde image of that dump.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::path::Path;

/// One binary placement decision variable with its solved value.
///
/// The key fields mirror the model's variable index: which chunk/column
/// pair the variable describes, the encoding chosen for it, whether the
/// column is the chunk's sort key, whether it is indexed, and the storage
/// tier it is placed on. `value` is the solver's (near-integral) solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementVar {
    /// Data chunk identifier
    pub chunk: u32,
    /// Logical table column identifier
    pub column: u32,
    /// Index into the configured encoding-name list
    pub encoding: usize,
    /// 1 if this column is the chunk's designated sort key
    pub sort_flag: u8,
    /// 1 if this column is indexed for this chunk; for sort-key variables
    /// the model also emits the sort rank in this slot
    pub index_flag: u8,
    /// Storage tier (budget group) identifier
    pub tier: u32,
    /// Solved value, expected to round to 0 or 1
    pub value: f64,
}

/// Per-tier storage metadata from the solved model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierResult {
    /// Tier identifier
    pub id: u32,
    /// Declared storage size in bytes (the tier's size variable)
    pub declared_bytes: f64,
    /// Realized memory consumption in bytes (the tier's budget constraint body)
    pub used_bytes: f64,
}

/// Solver termination condition as reported in the solution dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminationCondition {
    Optimal,
    Infeasible,
    Unbounded,
    #[serde(rename = "maxTimeLimit")]
    MaxTimeLimit,
    #[serde(other)]
    Unknown,
}

impl TerminationCondition {
    pub fn is_optimal(&self) -> bool {
        matches!(self, TerminationCondition::Optimal)
    }
}

impl fmt::Display for TerminationCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TerminationCondition::Optimal => "optimal",
            TerminationCondition::Infeasible => "infeasible",
            TerminationCondition::Unbounded => "unbounded",
            TerminationCondition::MaxTimeLimit => "maxTimeLimit",
            TerminationCondition::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Solver run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverSummary {
    /// Termination condition
    pub termination: TerminationCondition,
    /// Wall-clock solve time in seconds
    pub wall_time_secs: f64,
    /// Objective expression value
    pub objective: f64,
}

/// Complete solution dump for one model run.
///
/// `placements` preserves the model's variable declaration order; selection
/// and all downstream output follow that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolvedModel {
    /// Solver run summary
    pub solver: SolverSummary,
    /// Per-tier storage metadata, in tier declaration order
    pub tiers: Vec<TierResult>,
    /// All placement decision variables, in declaration order
    pub placements: Vec<PlacementVar>,
}

impl SolvedModel {
    /// Load a solution dump from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let model: SolvedModel = serde_json::from_reader(file)?;
        Ok(model)
    }
}
