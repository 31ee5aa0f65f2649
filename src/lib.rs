//! Facade crate for the Dropzone landing-spot engine.
//!
//! This crate re-exports the core domain types, the component scorers, and
//! the scoring and ranking entry points so callers can depend on a single
//! crate.

#![forbid(unsafe_code)]

pub use dropzone_core::{
    CenterDistance, ContestData, DatasetError, Factor, FightViability, Location,
    LocationCollection, LocationKind, Loot, Materials, Mobility, Popularity, Preset,
    PresetParseError, PresetWeights, RotationData, Shields, SurgePotential, TagOpportunities,
    WeightTable,
};
pub use dropzone_scorer::{
    ComponentScores, MAX_SCORE, NEUTRAL_SCORE, RankedResult, Report, ScoredResult,
    calculate_score, contest_risk_inverse, generate_all_rankings, generate_all_rankings_at,
    loot_quality, materials, normalize, rank_locations, rank_with_preset, rotate_potential,
    score_location, shield_availability, surge_potential,
};
