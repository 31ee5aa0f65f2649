//! End-to-end command runs against a dataset written to a temporary directory.

use super::helpers::{Workspace, captured, write_utf8};
use super::*;
use dropzone_core::{DatasetError, LocationKind, Preset};
use dropzone_scorer::{RankedResult, Report, ScoredResult};
use rstest::{fixture, rstest};

#[fixture]
fn workspace() -> Workspace {
    Workspace::new()
}

fn run_cli(argv: &[&str]) -> (Result<(), CliError>, String) {
    let mut stdout = Vec::new();
    let outcome = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| dispatch(cli.command, &mut stdout));
    (outcome, captured(stdout))
}

#[rstest]
fn score_prints_the_scored_location(workspace: Workspace) {
    let dataset = workspace.sample_dataset();
    let (outcome, stdout) = run_cli(&[
        "dropzone",
        "score",
        "quiet_farm",
        "--dataset",
        dataset.as_str(),
        "--preset",
        "super_safe",
    ]);

    outcome.expect("score should succeed");
    let scored: ScoredResult = serde_json::from_str(&stdout).expect("scored result JSON");
    assert_eq!(scored.poi_id, "quiet_farm");
    assert_eq!(scored.poi_name, "Quiet Farm");
    assert_eq!(scored.poi_type, LocationKind::NamedPoi);
    assert_eq!(scored.preset, Preset::SuperSafe);
    assert_eq!(scored.composite_score, 4.99);
}

#[rstest]
fn score_rejects_unknown_locations(workspace: Workspace) {
    let dataset = workspace.sample_dataset();
    let (outcome, stdout) = run_cli(&["dropzone", "score", "atlantis", "--dataset", dataset.as_str()]);

    match outcome.expect_err("unknown id should fail") {
        CliError::UnknownLocation { id } => assert_eq!(id, "atlantis"),
        other => panic!("expected UnknownLocation, found {other:?}"),
    }
    assert!(stdout.is_empty());
}

#[rstest]
fn rank_orders_by_preset(workspace: Workspace) {
    let dataset = workspace.sample_dataset();

    let (outcome, stdout) = run_cli(&["dropzone", "rank", "--dataset", dataset.as_str()]);
    outcome.expect("balanced rank should succeed");
    let balanced: Vec<RankedResult> = serde_json::from_str(&stdout).expect("ranking JSON");
    let ids: Vec<&str> = balanced.iter().map(|entry| entry.result.poi_id.as_str()).collect();
    assert_eq!(ids, ["hot_city", "quiet_farm", "lonely_shack"]);

    let (outcome, stdout) = run_cli(&[
        "dropzone",
        "rank",
        "--dataset",
        dataset.as_str(),
        "--preset",
        "super_safe",
    ]);
    outcome.expect("super safe rank should succeed");
    let safe: Vec<RankedResult> = serde_json::from_str(&stdout).expect("ranking JSON");
    assert_eq!(
        safe.first().map(|entry| entry.result.poi_id.as_str()),
        Some("quiet_farm")
    );
}

#[rstest]
fn rank_truncates_to_top(workspace: Workspace) {
    let dataset = workspace.sample_dataset();
    let (outcome, stdout) = run_cli(&[
        "dropzone",
        "rank",
        "--dataset",
        dataset.as_str(),
        "--top",
        "2",
    ]);

    outcome.expect("rank should succeed");
    let ranked: Vec<RankedResult> = serde_json::from_str(&stdout).expect("ranking JSON");
    let ranks: Vec<usize> = ranked.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, [1, 2]);
}

#[rstest]
fn report_prints_every_preset(workspace: Workspace) {
    let dataset = workspace.sample_dataset();
    let (outcome, stdout) = run_cli(&["dropzone", "report", "--dataset", dataset.as_str()]);

    outcome.expect("report should succeed");
    let report: Report = serde_json::from_str(&stdout).expect("report JSON");
    for preset in Preset::ALL {
        assert_eq!(report.rankings(preset).len(), 3, "{preset} ranking length");
    }
}

#[rstest]
fn report_writes_to_nested_output(workspace: Workspace) {
    let dataset = workspace.sample_dataset();
    let output = workspace.path("reports/latest/rankings.json");
    let (outcome, stdout) = run_cli(&[
        "dropzone",
        "report",
        "--dataset",
        dataset.as_str(),
        "--output",
        output.as_str(),
    ]);

    outcome.expect("report should succeed");
    assert!(stdout.is_empty(), "report should not be echoed to stdout");
    let written = std::fs::read_to_string(output.as_std_path()).expect("read report");
    let report: Report = serde_json::from_str(&written).expect("report JSON");
    assert_eq!(report.balanced.len(), 3);
}

#[rstest]
fn missing_dataset_names_the_flag(workspace: Workspace) {
    let dataset = workspace.path("nowhere.json");
    let (outcome, _) = run_cli(&["dropzone", "rank", "--dataset", dataset.as_str()]);

    match outcome.expect_err("missing dataset should fail") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_DATASET);
            assert_eq!(path, dataset);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn malformed_dataset_fails_to_load(workspace: Workspace) {
    let dataset = workspace.path("broken.json");
    write_utf8(&dataset, b"{ \"named_pois\": [ ");
    let (outcome, _) = run_cli(&["dropzone", "rank", "--dataset", dataset.as_str()]);

    match outcome.expect_err("malformed dataset should fail") {
        CliError::LoadDataset {
            source: DatasetError::Decode { .. },
            ..
        } => {}
        other => panic!("expected decode failure, found {other:?}"),
    }
}

#[rstest]
fn duplicate_ids_fail_validation(workspace: Workspace) {
    let dataset = workspace.path("duplicates.json");
    write_utf8(
        &dataset,
        br#"{
            "named_pois": [{ "id": "docks", "name": "Docks", "type": "named_poi" }],
            "landmarks": [{ "id": "docks", "name": "Dock Crane", "type": "landmark" }]
        }"#,
    );
    let (outcome, _) = run_cli(&["dropzone", "report", "--dataset", dataset.as_str()]);

    match outcome.expect_err("duplicate ids should fail") {
        CliError::LoadDataset {
            source: DatasetError::DuplicateId { id },
            ..
        } => assert_eq!(id, "docks"),
        other => panic!("expected DuplicateId, found {other:?}"),
    }
}
