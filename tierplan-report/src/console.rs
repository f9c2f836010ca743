//! Console report rendering
//!
//! Builds the human-readable report for one solved model: declared budgets,
//! solver outcome, realized memory consumption, and one fixed-width layout
//! grid per storage tier. Rendering returns a `String`; the binary decides
//! where it goes. A non-optimal solve short-circuits after the termination
//! line, leaving only the budget section above it.

use tierplan_common::model::SolvedModel;
use tierplan_common::units::megabytes_exact;
use tierplan_common::{Error, ReportConfig, Result};

use crate::sort::{Assignment, SortOrder};

/// Sort-indicator policy for grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Mark `S` on every assignment that carries a sort rank
    Flagged,
    /// Mark `S` only where the sort rank equals the cell's slot index.
    /// Only meaningful when the model's ranks mirror grid slot positions;
    /// with any other rank scheme the marker silently disagrees with
    /// `Flagged`.
    Positional,
}

/// Render the full console report.
///
/// `assignments` must be the derived active sequence for `model` — the same
/// sequence the CSV export consumes, so the two outputs cannot disagree on
/// what was selected.
pub fn render_report(
    model: &SolvedModel,
    assignments: &[Assignment],
    config: &ReportConfig,
    sort_indicator: SortIndicator,
) -> Result<String> {
    let mut out = String::new();

    out.push_str("Solving for budget;\n");
    for tier in &model.tiers {
        out.push_str(&format!(
            "  Storage: {}     Storage Size: {}\n",
            tier.id, tier.declared_bytes
        ));
    }
    out.push('\n');

    out.push_str(&format!("Result: {}", model.solver.termination));
    if !model.solver.termination.is_optimal() {
        out.push('\n');
        return Ok(out);
    }

    out.push_str(&format!(
        " (walltime: {:.4}s)\n",
        model.solver.wall_time_secs
    ));
    out.push_str(&format!("Objective: {}\n", model.solver.objective));
    out.push_str("Memory consumption:\n");
    for tier in &model.tiers {
        out.push_str(&format!(
            "  {}: {} MB\n",
            tier.id,
            megabytes_exact(tier.used_bytes, config.bytes_per_megabyte)
        ));
    }
    out.push('\n');

    render_layout_grids(&mut out, model, assignments, config, sort_indicator)?;
    Ok(out)
}

/// One layout grid per tier: a header line, then rows of fixed-width cells.
///
/// The grid is slot-driven: assignments are consumed in sequence, one per
/// cell, `columns.len()` cells per row, with the chunk label opening each
/// row. A cell whose assignment belongs to a different tier renders as
/// blank padding, so every tier's grid has the same shape.
fn render_layout_grids(
    out: &mut String,
    model: &SolvedModel,
    assignments: &[Assignment],
    config: &ReportConfig,
    sort_indicator: SortIndicator,
) -> Result<()> {
    // uniform cell width across header and grid
    let width = config
        .encodings
        .iter()
        .map(|e| e.len())
        .max()
        .unwrap_or(0)
        + 10;
    let slots_per_row = config.columns.len();

    for tier in &model.tiers {
        out.push_str(&format!("Storage: {}\n", tier.id));
        out.push_str(&format!("{:<width$}", "CHUNK"));
        for column_name in &config.columns {
            out.push_str(&format!("{:<width$}", column_name));
        }
        out.push('\n');

        let mut slot = 0;
        for a in assignments {
            if slot == 0 {
                out.push_str(&format!("{:<width$}", a.chunk));
            }
            if a.tier == tier.id {
                out.push_str(&format!(
                    "{:<width$}",
                    cell_text(a, slot, config, sort_indicator)?
                ));
            } else {
                out.push_str(&" ".repeat(width));
            }
            slot += 1;
            if slot == slots_per_row {
                out.push('\n');
                slot = 0;
            }
        }
        if slot != 0 {
            out.push('\n');
        }
        out.push('\n');
    }
    Ok(())
}

/// Cell body: 2-char sort indicator, 2-char index indicator, encoding name.
fn cell_text(
    a: &Assignment,
    slot: usize,
    config: &ReportConfig,
    sort_indicator: SortIndicator,
) -> Result<String> {
    let sort_mark = match sort_indicator {
        SortIndicator::Flagged => {
            if a.sort.is_ranked() {
                "S "
            } else {
                "- "
            }
        }
        SortIndicator::Positional => {
            if a.sort == SortOrder::Rank(slot as u32) {
                "S "
            } else {
                "- "
            }
        }
    };
    let index_mark = if a.index_flag { "I " } else { "- " };
    let encoding = config.encodings.get(a.encoding).ok_or_else(|| {
        Error::Model(format!(
            "encoding index {} out of range for chunk {} column {}",
            a.encoding, a.chunk, a.column
        ))
    })?;
    Ok(format!("{}{}{}", sort_mark, index_mark, encoding))
}
