//! CSV export of the selected configuration
//!
//! Writes one delimited file per model run. The file name encodes the
//! per-tier declared storage sizes in whole megabytes so that runs with
//! different budgets land in different files. The output folder must exist;
//! a missing folder surfaces as the `File::create` error, unretried.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tierplan_common::model::TierResult;
use tierplan_common::units::megabytes_floor;
use tierplan_common::{ReportConfig, Result};
use tracing::info;

use crate::sort::Assignment;

/// CSV header fields, in row order.
pub const CSV_HEADER: [&str; 6] = ["CHUNK", "COLUMN", "ENCODING", "SORT", "INDEX", "STORAGE"];

/// Target path for the export: `<folder>/<model_name>_<tier sizes in whole
/// megabytes, hyphen-joined>.csv`.
pub fn csv_file_name(config: &ReportConfig, tiers: &[TierResult]) -> PathBuf {
    let sizes: Vec<String> = tiers
        .iter()
        .map(|t| megabytes_floor(t.declared_bytes, config.bytes_per_megabyte).to_string())
        .collect();
    config
        .output_folder
        .join(format!("{}_{}.csv", config.model_name, sizes.join("-")))
}

/// Write the selected configuration to its CSV file.
///
/// Emits the header row, then one row per assignment in sequence order.
/// The SORT field carries the derived rank or the configured unsorted
/// sentinel; INDEX is 0/1. Returns the written path.
pub fn write_csv(
    config: &ReportConfig,
    tiers: &[TierResult],
    assignments: &[Assignment],
) -> Result<PathBuf> {
    let path = csv_file_name(config, tiers);
    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);

    let delim = config.delimiter;
    writeln!(out, "{}", CSV_HEADER.join(delim.to_string().as_str()))?;

    for a in assignments {
        writeln!(
            out,
            "{1}{0}{2}{0}{3}{0}{4}{0}{5}{0}{6}",
            delim,
            a.chunk,
            a.column,
            a.encoding,
            a.sort.serialized_value(config.unsorted_sentinel),
            a.index_flag as u8,
            a.tier,
        )?;
    }
    out.flush()?;

    info!(
        "wrote {} configuration rows to {}",
        assignments.len(),
        path.display()
    );
    Ok(path)
}
