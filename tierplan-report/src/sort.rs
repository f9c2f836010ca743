//! Sort-order derivation
//!
//! The model marks at most one (chunk, column) placement per chunk as the
//! chunk's sort key and smuggles that key's rank through the index-flag
//! slot of the flagged variable. Derivation makes this explicit: a single
//! left-to-right pass records each chunk's sort key and its rank, then a
//! second pass rewrites every assignment to carry either that rank or an
//! explicit unsorted marker. No raw slot value ever leaks into output.

use crate::select::RawAssignment;
use std::collections::HashMap;

/// Derived sort order of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// This assignment is its chunk's sort key, with the model-provided rank
    Rank(u32),
    /// Not a sort key
    Unsorted,
}

impl SortOrder {
    /// Value written to the CSV SORT column: the rank, or the configured
    /// unsorted sentinel.
    pub fn serialized_value(&self, sentinel: u32) -> u32 {
        match self {
            SortOrder::Rank(rank) => *rank,
            SortOrder::Unsorted => sentinel,
        }
    }

    /// Whether this assignment is flagged as a sort key at all.
    pub fn is_ranked(&self) -> bool {
        matches!(self, SortOrder::Rank(_))
    }
}

/// One selected placement with its derived sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub chunk: u32,
    pub column: u32,
    pub encoding: usize,
    pub sort: SortOrder,
    pub index_flag: bool,
    pub tier: u32,
}

/// A chunk's recorded sort key: which column, at which rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SortKey {
    column: u32,
    rank: u32,
}

/// Rewrite every assignment's sort order from the recorded sort keys.
///
/// Pass 1 walks the active sequence and records, per chunk, the column and
/// rank of the placement flagged as the sort key. The rank is copied from
/// the flagged placement's index-flag slot at discovery, never recounted.
/// If a chunk carries more than one flagged placement, the last one in
/// sequence order wins.
///
/// Pass 2 assigns `SortOrder::Rank` to the exact (chunk, column) pairs in
/// the registry and `SortOrder::Unsorted` to everything else. Sequence
/// order is preserved; no assignment is dropped or duplicated.
pub fn derive_sort_orders(active: &[RawAssignment]) -> Vec<Assignment> {
    let mut sort_keys: HashMap<u32, SortKey> = HashMap::new();
    for item in active {
        if item.sort_flag == 1 {
            sort_keys.insert(
                item.chunk,
                SortKey {
                    column: item.column,
                    rank: item.index_flag as u32,
                },
            );
        }
    }

    active
        .iter()
        .map(|item| {
            let sort = match sort_keys.get(&item.chunk) {
                Some(key) if key.column == item.column => SortOrder::Rank(key.rank),
                _ => SortOrder::Unsorted,
            };
            Assignment {
                chunk: item.chunk,
                column: item.column,
                encoding: item.encoding,
                sort,
                index_flag: item.index_flag != 0,
                tier: item.tier,
            }
        })
        .collect()
}
