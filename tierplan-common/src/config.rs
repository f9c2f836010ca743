//! Report configuration loading
//!
//! Every output knob of the reporters lives here instead of in scattered
//! constants: where the CSV lands, how rows are delimited, the unit
//! conversion factor, the unsorted sentinel, and the ordered encoding and
//! display-column name lists. All fields have defaults, so a TOML file only
//! needs to name the fields it overrides.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Configuration for the CSV export and console report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Folder the CSV export is written into; must already exist
    pub output_folder: PathBuf,
    /// Model-name prefix for the CSV file name
    pub model_name: String,
    /// Field delimiter for CSV rows
    pub delimiter: char,
    /// Bytes per megabyte for both unit conversions
    pub bytes_per_megabyte: u64,
    /// Sort-order value written for items that are not sort keys
    pub unsorted_sentinel: u32,
    /// Encoding names, ordered by model encoding index
    pub encodings: Vec<String>,
    /// Display column names, ordered as the layout grid renders them
    pub columns: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from("../data/config"),
            model_name: "ISE".to_string(),
            delimiter: ',',
            bytes_per_megabyte: 1_000_000,
            unsorted_sentinel: 5,
            encodings: vec![
                "Dictionary".to_string(),
                "Unencoded".to_string(),
                "LZ4".to_string(),
                "RunLength".to_string(),
                "FoR-SIMD".to_string(),
            ],
            columns: vec![
                "driver_id".to_string(),
                "latitude".to_string(),
                "longitude".to_string(),
                "timestamp".to_string(),
                "status".to_string(),
            ],
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file, falling back to defaults for
    /// any field the file does not set.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ReportConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!("loaded report config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the reporters cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.encodings.is_empty() {
            return Err(Error::Config("encodings list is empty".to_string()));
        }
        if self.columns.is_empty() {
            return Err(Error::Config("columns list is empty".to_string()));
        }
        if self.bytes_per_megabyte == 0 {
            return Err(Error::Config(
                "bytes_per_megabyte must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
