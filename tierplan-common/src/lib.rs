//! # tierplan Common Library
//!
//! Shared code for the tierplan storage-layout reporting tools including:
//! - Solved-model data types (decision variables, tier results, solver summary)
//! - Report configuration loading
//! - Byte/megabyte unit conversions
//! - Error types

pub mod config;
pub mod error;
pub mod model;
pub mod units;

pub use config::ReportConfig;
pub use error::{Error, Result};
pub use model::{PlacementVar, SolvedModel, SolverSummary, TerminationCondition, TierResult};
