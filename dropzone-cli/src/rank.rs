//! Rank command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use dropzone_core::Preset;
use dropzone_scorer::rank_with_preset;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::{dataset_or_default, load_dataset, write_json};
use crate::{ARG_DATASET, ARG_PRESET, ARG_TOP, CliError};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Score every location in the dataset under one preset and \
                 print them best first, with 1-based ranks, as JSON.",
    about = "Rank every location under one preset"
)]
#[ortho_config(prefix = "DROPZONE")]
pub(crate) struct RankArgs {
    /// Path to the location dataset JSON.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Weight preset: balanced, super_safe, or risky_keying.
    #[arg(long = ARG_PRESET, value_name = "name")]
    #[serde(default)]
    pub(crate) preset: Option<Preset>,
    /// Only print the best `n` locations.
    #[arg(long = ARG_TOP, value_name = "n")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
}

impl RankArgs {
    fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RankConfig::from(merged))
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) preset: Preset,
    pub(crate) top: Option<usize>,
}

impl From<RankArgs> for RankConfig {
    fn from(args: RankArgs) -> Self {
        Self {
            dataset: dataset_or_default(args.dataset),
            preset: args.preset.unwrap_or_default(),
            top: args.top,
        }
    }
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let collection = load_dataset(&config.dataset)?;
    let mut ranked = rank_with_preset(&collection, config.preset);
    if let Some(top) = config.top {
        ranked.truncate(top);
    }
    write_json(writer, &ranked)
}
