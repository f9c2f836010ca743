//! End-to-end pipeline tests: solved model in, console report and CSV out.

use tierplan_common::model::{
    PlacementVar, SolvedModel, SolverSummary, TerminationCondition, TierResult,
};
use tierplan_common::ReportConfig;
use tierplan_report::console::{render_report, SortIndicator};
use tierplan_report::export::write_csv;
use tierplan_report::{derive_sort_orders, select_active, SortOrder};

fn var(
    chunk: u32,
    column: u32,
    encoding: usize,
    sort_flag: u8,
    index_flag: u8,
    tier: u32,
    value: f64,
) -> PlacementVar {
    PlacementVar {
        chunk,
        column,
        encoding,
        sort_flag,
        index_flag,
        tier,
        value,
    }
}

/// Two chunks across two tiers. Chunk 0 sorts on column 0 (rank 1, also
/// indexed); chunk 1 sorts on column 0 (rank 0). One rejected variable
/// sits between the active ones to exercise selection.
fn example_model(termination: TerminationCondition) -> SolvedModel {
    SolvedModel {
        solver: SolverSummary {
            termination,
            wall_time_secs: 0.0421,
            objective: 17.25,
        },
        tiers: vec![
            TierResult {
                id: 0,
                declared_bytes: 2_500_000.0,
                used_bytes: 1_250_000.0,
            },
            TierResult {
                id: 1,
                declared_bytes: 1_000_000.0,
                used_bytes: 750_000.0,
            },
        ],
        placements: vec![
            var(0, 0, 0, 1, 1, 0, 1.0),
            var(0, 0, 1, 0, 0, 0, 0.0), // rejected encoding alternative
            var(0, 1, 0, 0, 0, 0, 0.9999),
            var(1, 0, 1, 1, 0, 1, 1.0),
        ],
    }
}

fn example_config(output_folder: std::path::PathBuf) -> ReportConfig {
    ReportConfig {
        output_folder,
        encodings: vec!["Dictionary".to_string(), "LZ4".to_string()],
        columns: vec!["driver_id".to_string(), "latitude".to_string()],
        ..ReportConfig::default()
    }
}

#[test]
fn derivation_matches_worked_example() {
    let model = example_model(TerminationCondition::Optimal);
    let active = select_active(&model.placements);
    assert_eq!(active.len(), 3);

    let assignments = derive_sort_orders(&active);
    assert_eq!(assignments[0].sort, SortOrder::Rank(1));
    assert_eq!(assignments[1].sort, SortOrder::Unsorted);
    assert_eq!(assignments[2].sort, SortOrder::Rank(0));
}

#[test]
fn csv_round_trip_matches_assignments() {
    let dir = tempfile::tempdir().unwrap();
    let config = example_config(dir.path().to_path_buf());
    let model = example_model(TerminationCondition::Optimal);

    let assignments = derive_sort_orders(&select_active(&model.placements));
    let path = write_csv(&config, &model.tiers, &assignments).unwrap();

    // tiers 2.5 MB and 1 MB, floored
    assert_eq!(path.file_name().unwrap(), "ISE_2-1.csv");

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), assignments.len() + 1);
    assert_eq!(lines[0], "CHUNK,COLUMN,ENCODING,SORT,INDEX,STORAGE");
    assert_eq!(lines[1], "0,0,0,1,1,0");
    assert_eq!(lines[2], "0,1,0,5,0,0");
    assert_eq!(lines[3], "1,0,1,0,0,1");
}

#[test]
fn console_and_csv_agree_on_selection() {
    let dir = tempfile::tempdir().unwrap();
    let config = example_config(dir.path().to_path_buf());
    let model = example_model(TerminationCondition::Optimal);

    let assignments = derive_sort_orders(&select_active(&model.placements));
    let report =
        render_report(&model, &assignments, &config, SortIndicator::Flagged).unwrap();
    let path = write_csv(&config, &model.tiers, &assignments).unwrap();
    let csv = std::fs::read_to_string(&path).unwrap();

    // same three assignments in both outputs
    assert_eq!(csv.lines().count(), 4);
    assert!(report.contains("S I Dictionary")); // chunk 0, sort key, indexed
    assert!(report.contains("- - Dictionary")); // chunk 0, plain column
    assert!(report.contains("S - LZ4")); // chunk 1, sort key on tier 1
}

#[test]
fn console_reports_budgets_and_memory() {
    let dir = tempfile::tempdir().unwrap();
    let config = example_config(dir.path().to_path_buf());
    let model = example_model(TerminationCondition::Optimal);

    let assignments = derive_sort_orders(&select_active(&model.placements));
    let report =
        render_report(&model, &assignments, &config, SortIndicator::Flagged).unwrap();

    assert!(report.contains("Solving for budget;"));
    assert!(report.contains("  Storage: 0     Storage Size: 2500000"));
    assert!(report.contains("  Storage: 1     Storage Size: 1000000"));
    assert!(report.contains("Result: optimal (walltime: 0.0421s)"));
    assert!(report.contains("Objective: 17.25"));
    assert!(report.contains("  0: 1.25 MB"));
    assert!(report.contains("  1: 0.75 MB"));
}

#[test]
fn infeasible_model_short_circuits_whole_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config = example_config(dir.path().to_path_buf());
    let model = example_model(TerminationCondition::Infeasible);

    let assignments = derive_sort_orders(&select_active(&model.placements));
    let report =
        render_report(&model, &assignments, &config, SortIndicator::Flagged).unwrap();

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Solving for budget;",
            "  Storage: 0     Storage Size: 2500000",
            "  Storage: 1     Storage Size: 1000000",
            "",
            "Result: infeasible",
        ]
    );
}
