//! tierplan-report - Storage-layout solution reporting tool
//!
//! Reads one solved placement-model dump (JSON), prints the console layout
//! report, and exports the selected configuration as CSV. Selection and
//! sort-order derivation run once; both outputs consume the same sequence.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tierplan_common::{ReportConfig, SolvedModel};
use tierplan_report::console::{render_report, SortIndicator};
use tierplan_report::export::write_csv;
use tierplan_report::{derive_sort_orders, select_active};

/// Command-line arguments for tierplan-report
#[derive(Parser, Debug)]
#[command(name = "tierplan-report")]
#[command(about = "Console report and CSV export for solved storage-layout models")]
#[command(version)]
struct Args {
    /// Path to the solved-model JSON dump
    model: PathBuf,

    /// Report configuration file (TOML); defaults apply when omitted
    #[arg(short, long, env = "TIERPLAN_CONFIG")]
    config: Option<PathBuf>,

    /// Override the CSV output folder from the configuration
    #[arg(short, long)]
    output_folder: Option<PathBuf>,

    /// Mark sort keys positionally (rank must equal the grid slot) instead
    /// of marking every flagged sort key
    #[arg(long)]
    positional: bool,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tierplan_report=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting tierplan-report v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match &args.config {
        Some(path) => ReportConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ReportConfig::default(),
    };
    if let Some(folder) = args.output_folder {
        config.output_folder = folder;
    }

    let model = SolvedModel::from_json_file(&args.model)
        .with_context(|| format!("failed to load model dump from {}", args.model.display()))?;

    let active = select_active(&model.placements);
    let assignments = derive_sort_orders(&active);

    let indicator = if args.positional {
        SortIndicator::Positional
    } else {
        SortIndicator::Flagged
    };
    let report = render_report(&model, &assignments, &config, indicator)?;
    print!("{report}");

    let path = write_csv(&config, &model.tiers, &assignments)
        .context("failed to write configuration CSV")?;
    info!("configuration exported to {}", path.display());

    Ok(())
}
