//! Score command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dropzone_core::Preset;
use dropzone_scorer::score_location;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::{dataset_or_default, load_dataset, write_json};
use crate::{ARG_DATASET, ARG_LOCATION_ID, ARG_PRESET, CliError, ENV_SCORE_LOCATION_ID};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score one location from the dataset and print the component \
                 breakdown, weights, and composite as JSON.",
    about = "Score a single location"
)]
#[ortho_config(prefix = "DROPZONE")]
pub(crate) struct ScoreArgs {
    /// Identifier of the location to score.
    #[arg(value_name = "id")]
    #[serde(default)]
    pub(crate) location_id: Option<String>,
    /// Path to the location dataset JSON.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Weight preset: balanced, super_safe, or risky_keying.
    #[arg(long = ARG_PRESET, value_name = "name")]
    #[serde(default)]
    pub(crate) preset: Option<Preset>,
}

impl ScoreArgs {
    fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) location_id: String,
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) preset: Preset,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let location_id = args.location_id.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION_ID,
            env: ENV_SCORE_LOCATION_ID,
        })?;
        Ok(Self {
            location_id,
            dataset: dataset_or_default(args.dataset),
            preset: args.preset.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let collection = load_dataset(&config.dataset)?;
    let location = collection
        .find(&config.location_id)
        .ok_or_else(|| CliError::UnknownLocation {
            id: config.location_id.clone(),
        })?;
    let scored = score_location(location, config.preset);
    debug!(
        location = %scored.poi_id,
        preset = %config.preset,
        composite = scored.composite_score,
        "scored location"
    );
    write_json(writer, &scored)
}
