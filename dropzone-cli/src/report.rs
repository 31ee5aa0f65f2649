//! Report command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dropzone_fs::write_utf8_file;
use dropzone_scorer::generate_all_rankings;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dataset::{dataset_or_default, load_dataset, to_pretty_json, write_json};
use crate::{ARG_DATASET, ARG_OUTPUT, CliError};

/// CLI arguments for the `report` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "report",
    long_about = "Rank the dataset under every built-in preset and emit one \
                 JSON report with a generation timestamp and the weight \
                 table. Without --output the report goes to stdout.",
    about = "Rank under all presets and emit a report"
)]
#[ortho_config(prefix = "DROPZONE")]
pub(crate) struct ReportArgs {
    /// Path to the location dataset JSON.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Write the report here instead of stdout; parent directories are
    /// created as needed.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ReportArgs {
    fn into_config(self) -> Result<ReportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(ReportConfig::from(merged))
    }
}

/// Resolved `report` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ReportConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl From<ReportArgs> for ReportConfig {
    fn from(args: ReportArgs) -> Self {
        Self {
            dataset: dataset_or_default(args.dataset),
            output: args.output,
        }
    }
}

pub(crate) fn run_report_with(args: ReportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let collection = load_dataset(&config.dataset)?;
    let report = generate_all_rankings(&collection);
    let Some(path) = config.output else {
        return write_json(writer, &report);
    };
    let mut payload = to_pretty_json(&report)?;
    payload.push('\n');
    write_utf8_file(&path, payload.as_bytes()).map_err(|source| CliError::WriteReport {
        path: path.clone(),
        source,
    })?;
    info!(path = %path, locations = collection.len(), "wrote report");
    Ok(())
}
