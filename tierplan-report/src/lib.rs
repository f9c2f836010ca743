//! tierplan-report library - storage-layout solution reporting
//!
//! Turns one solved placement model into two outputs that agree on which
//! assignments were selected: a CSV export of the chosen configuration and
//! a per-tier console layout report. Selection and sort-order derivation
//! run once; both projectors consume the same derived sequence.

pub mod console;
pub mod export;
pub mod select;
pub mod sort;

pub use select::{select_active, RawAssignment};
pub use sort::{derive_sort_orders, Assignment, SortOrder};
