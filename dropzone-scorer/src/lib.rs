//! Composite landing-spot scoring for Dropzone locations.
//!
//! Scoring runs in three layers:
//! - **Component scorers** map one facet of a
//!   [`Location`](dropzone_core::Location) onto the `0.0..=10.0` scale.
//! - **Composite scoring** blends the six components with a
//!   [`Preset`](dropzone_core::Preset)'s weights and rounds the result to two
//!   decimals.
//! - **Ranking** scores a whole
//!   [`LocationCollection`](dropzone_core::LocationCollection), sorts it
//!   (stably) by composite score, and assembles multi-preset reports.
//!
//! Everything here is pure. Identical inputs always produce identical
//! scores; only the report timestamp depends on the clock.
//!
//! # Examples
//!
//! ```
//! use dropzone_core::{Location, LocationKind, Loot};
//! use dropzone_scorer::calculate_score;
//!
//! let location = Location::new("docks", "Docks", LocationKind::NamedPoi).with_loot(Loot {
//!     chests: 20.0,
//!     rare_chests: 3.0,
//!     ammo_boxes: 25.0,
//! });
//! let scored = calculate_score(&location, "balanced");
//! assert_eq!(scored.component_scores.loot_quality, 6.7);
//! ```

#![forbid(unsafe_code)]

mod components;
mod composite;
mod normalize;
mod ranking;

pub use components::{
    ComponentScores, contest_risk_inverse, loot_quality, materials, rotate_potential,
    shield_availability, surge_potential,
};
pub use composite::{ScoredResult, calculate_score, score_location};
pub use normalize::{MAX_SCORE, NEUTRAL_SCORE, normalize};
pub use ranking::{
    RankedResult, Report, generate_all_rankings, generate_all_rankings_at, rank_locations,
    rank_with_preset,
};
