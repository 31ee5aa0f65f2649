//! Behaviour-driven step definitions driving the CLI command scenarios.

use super::helpers::{Workspace, captured};
use super::*;
use camino::Utf8PathBuf;
use dropzone_scorer::{RankedResult, ScoredResult};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

/// Aggregates command scenario state so each step only needs a single world
/// argument.
#[derive(Debug)]
struct CommandWorld {
    workspace: Workspace,
    dataset: Utf8PathBuf,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<String>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let dataset = workspace.path("poi_dataset.json");
        Self {
            workspace,
            dataset,
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(String::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, subcommand: &str) {
        let mut argv = vec![
            "dropzone".to_owned(),
            subcommand.to_owned(),
            format!("--{ARG_DATASET}"),
            self.dataset.as_str().to_owned(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());

        let mut buffer = Vec::new();
        let outcome = Cli::try_parse_from(argv)
            .map_err(CliError::from)
            .and_then(|cli| dispatch(cli.command, &mut buffer));
        *self.stdout.borrow_mut() = captured(buffer);
        self.result.replace(Some(outcome));
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

#[given("a sample dataset exists on disk")]
fn sample_dataset_exists(#[from(world)] world: &CommandWorld) {
    let written = world.workspace.sample_dataset();
    assert_eq!(written, world.dataset);
}

#[given("no dataset exists on disk")]
fn no_dataset(#[from(world)] world: &CommandWorld) {
    assert!(!world.dataset.as_std_path().exists());
}

#[given("I choose the {preset:word} preset")]
fn choose_preset(#[from(world)] world: &CommandWorld, preset: String) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PRESET}"), preset]);
}

#[given("I pass the location id {id:word}")]
fn pass_location(#[from(world)] world: &CommandWorld, id: String) {
    world.cli_args.borrow_mut().push(id);
}

#[when("I run the rank command")]
fn run_rank(#[from(world)] world: &CommandWorld) {
    world.run("rank");
}

#[when("I run the score command")]
fn run_score(#[from(world)] world: &CommandWorld) {
    world.run("score");
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("{id:word} is ranked first")]
fn ranked_first(#[from(world)] world: &CommandWorld, id: String) {
    let ranked: Vec<RankedResult> =
        serde_json::from_str(&world.stdout.borrow()).expect("ranking JSON");
    let first = ranked.first().expect("ranking should not be empty");
    assert_eq!(first.rank, 1);
    assert_eq!(first.result.poi_id, id);
}

#[then("the printed score belongs to {id:word}")]
fn score_belongs_to(#[from(world)] world: &CommandWorld, id: String) {
    let scored: ScoredResult =
        serde_json::from_str(&world.stdout.borrow()).expect("scored result JSON");
    assert_eq!(scored.poi_id, id);
}

#[then("the CLI reports that the \"location-id\" argument is missing")]
fn reports_missing_location(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_LOCATION_ID);
            assert_eq!(*env, ENV_SCORE_LOCATION_ID);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[then("the CLI reports that the dataset file is missing")]
fn reports_missing_dataset(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(*field, ARG_DATASET);
            assert_eq!(*path, world.dataset);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(
    rank_super_safe,
    "ranking a dataset under the super safe preset"
);
register_command_scenario!(score_single_location, "scoring a single location");
register_command_scenario!(missing_location_id, "rejecting a missing location id");
register_command_scenario!(missing_dataset, "rejecting a missing dataset");
