//! Command-line interface for scoring and ranking Dropzone landing spots.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod dataset;
mod error;
mod rank;
mod report;
mod score;
pub mod telemetry;

pub use dataset::DEFAULT_DATASET;
pub use error::CliError;

use rank::{RankArgs, run_rank_with};
use report::{ReportArgs, run_report_with};
use score::{ScoreArgs, run_score_with};

pub(crate) const ARG_DATASET: &str = "dataset";
pub(crate) const ARG_PRESET: &str = "preset";
pub(crate) const ARG_TOP: &str = "top";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ARG_LOCATION_ID: &str = "location-id";
pub(crate) const ENV_SCORE_LOCATION_ID: &str = "DROPZONE_CMDS_SCORE_LOCATION_ID";

/// Run the Dropzone CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration, the dataset, or
/// output writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, writer),
        Command::Rank(args) => run_rank_with(args, writer),
        Command::Report(args) => run_report_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dropzone",
    about = "Score and rank landing spots from a location dataset",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single location under one preset.
    Score(ScoreArgs),
    /// Rank every location under one preset.
    Rank(RankArgs),
    /// Rank every location under all presets and emit a report.
    Report(ReportArgs),
}

#[cfg(test)]
mod tests;
