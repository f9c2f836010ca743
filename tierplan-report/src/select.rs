//! Active-assignment selection
//!
//! The solver reports every placement variable with a continuous value that
//! is expected to be integral. Selection keeps the variables whose value
//! rounds to 1 and drops everything else, preserving the model's variable
//! declaration order so that downstream output is deterministic.

use tierplan_common::model::PlacementVar;
use tracing::debug;

/// One selected placement, before sort-order derivation.
///
/// Carries the raw model fields of an active variable. `index_flag` still
/// holds the model's raw slot value here: for sort-key placements the model
/// emits the sort rank in that slot, and the deriver reads it from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAssignment {
    pub chunk: u32,
    pub column: u32,
    pub encoding: usize,
    /// 1 if this placement is its chunk's designated sort key
    pub sort_flag: u8,
    /// Index flag, doubling as the rank source for sort-key placements
    pub index_flag: u8,
    pub tier: u32,
}

impl RawAssignment {
    fn from_var(var: &PlacementVar) -> Self {
        Self {
            chunk: var.chunk,
            column: var.column,
            encoding: var.encoding,
            sort_flag: var.sort_flag,
            index_flag: var.index_flag,
            tier: var.tier,
        }
    }
}

/// Select the placements whose solved value rounds to 1.
///
/// Values are expected to be finite and near-integral. Rounding is
/// ties-to-even, so a value of exactly 0.5 is *not* selected while 1.5
/// rounds to 2 and is not selected either; only values rounding to exactly
/// 1 survive. Output order is input order.
pub fn select_active(placements: &[PlacementVar]) -> Vec<RawAssignment> {
    let active: Vec<RawAssignment> = placements
        .iter()
        .filter(|var| var.value.round_ties_even() == 1.0)
        .map(|var| RawAssignment::from_var(var))
        .collect();

    debug!(
        "selected {} active placements out of {}",
        active.len(),
        placements.len()
    );
    active
}
