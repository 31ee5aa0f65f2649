//! Ranking whole collections and assembling multi-preset reports.

use chrono::{DateTime, SubsecRound, Utc};
use dropzone_core::{LocationCollection, Preset, WeightTable};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::composite::{ScoredResult, score_location};

/// A scored result with its 1-based position in a preset's ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Position after sorting; `1` is the best landing spot.
    pub rank: usize,
    /// The underlying scored result, flattened when serialised.
    #[serde(flatten)]
    pub result: ScoredResult,
}

/// Rank every location in `collection` under the named preset.
///
/// Unrecognised preset names fall back to [`Preset::Balanced`].
#[must_use]
pub fn rank_locations(collection: &LocationCollection, preset_name: &str) -> Vec<RankedResult> {
    rank_with_preset(collection, Preset::resolve(preset_name))
}

/// Rank every location in `collection` under `preset`.
///
/// Named POIs are scored before landmarks. The sort is stable, so locations
/// with equal composite scores keep that input order. Ranks are dense:
/// `rank == index + 1` even across ties.
#[must_use]
pub fn rank_with_preset(collection: &LocationCollection, preset: Preset) -> Vec<RankedResult> {
    let mut scored: Vec<ScoredResult> = collection
        .iter()
        .map(|location| score_location(location, preset))
        .collect();
    scored.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
    debug!("ranked {} locations under {preset}", scored.len());
    (1..)
        .zip(scored)
        .map(|(rank, result)| RankedResult { rank, result })
        .collect()
}

/// Rankings for every built-in preset plus the weights behind them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Ranking under [`Preset::Balanced`].
    pub balanced: Vec<RankedResult>,
    /// Ranking under [`Preset::SuperSafe`].
    pub super_safe: Vec<RankedResult>,
    /// Ranking under [`Preset::RiskyKeying`].
    pub risky_keying: Vec<RankedResult>,
    /// When the report was generated, serialised as RFC 3339.
    pub generated_at: DateTime<Utc>,
    /// Weight table used for every ranking.
    pub scoring_weights: WeightTable,
}

impl Report {
    /// Return the ranking produced for `preset`.
    #[must_use]
    pub fn rankings(&self, preset: Preset) -> &[RankedResult] {
        match preset {
            Preset::Balanced => &self.balanced,
            Preset::SuperSafe => &self.super_safe,
            Preset::RiskyKeying => &self.risky_keying,
        }
    }
}

/// Rank `collection` under all three presets, stamped with the current time.
///
/// The timestamp is truncated to milliseconds.
#[must_use]
pub fn generate_all_rankings(collection: &LocationCollection) -> Report {
    generate_all_rankings_at(collection, Utc::now().trunc_subsecs(3))
}

/// Rank `collection` under all three presets with an explicit timestamp.
///
/// Apart from `generated_at`, the report depends only on `collection`.
#[must_use]
pub fn generate_all_rankings_at(
    collection: &LocationCollection,
    generated_at: DateTime<Utc>,
) -> Report {
    Report {
        balanced: rank_with_preset(collection, Preset::Balanced),
        super_safe: rank_with_preset(collection, Preset::SuperSafe),
        risky_keying: rank_with_preset(collection, Preset::RiskyKeying),
        generated_at,
        scoring_weights: WeightTable::BUILT_IN,
    }
}
