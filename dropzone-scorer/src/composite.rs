//! Composite scoring under a weight preset.

use dropzone_core::{Location, LocationKind, Preset, PresetWeights};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::ComponentScores;
use crate::normalize::round_hundredths;

/// The outcome of scoring one location under one preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// Identifier of the scored location.
    pub poi_id: String,
    /// Display name of the scored location.
    pub poi_name: String,
    /// Whether the location is a named POI or a landmark.
    pub poi_type: LocationKind,
    /// Preset whose weights were applied.
    #[serde(rename = "preset_name")]
    pub preset: Preset,
    /// Weighted composite, rounded to two decimals.
    pub composite_score: f64,
    /// The six unrounded component scores.
    pub component_scores: ComponentScores,
    /// The weights that produced `composite_score`.
    pub weights_used: PresetWeights,
}

/// Score a location under the named preset.
///
/// Unrecognised preset names fall back to [`Preset::Balanced`]; see
/// [`Preset::resolve`].
///
/// # Examples
/// ```
/// use dropzone_core::{Location, LocationKind, Preset};
/// use dropzone_scorer::calculate_score;
///
/// let location = Location::new("shack", "Shack", LocationKind::Landmark);
/// let scored = calculate_score(&location, "not_a_preset");
/// assert_eq!(scored.preset, Preset::Balanced);
/// assert!((0.0..=10.0).contains(&scored.composite_score));
/// ```
#[must_use]
pub fn calculate_score(location: &Location, preset_name: &str) -> ScoredResult {
    score_location(location, Preset::resolve(preset_name))
}

/// Score a location under an already-resolved preset.
///
/// Only the final composite is rounded; component scores are reported as
/// computed.
#[must_use]
pub fn score_location(location: &Location, preset: Preset) -> ScoredResult {
    let weights = preset.weights();
    let component_scores = ComponentScores::for_location(location);
    let composite_score = round_hundredths(component_scores.weighted_sum(&weights));
    debug!(
        "scored {} under {preset}: {composite_score:.2}",
        location.id
    );
    ScoredResult {
        poi_id: location.id.clone(),
        poi_name: location.name.clone(),
        poi_type: location.kind,
        preset,
        composite_score,
        component_scores,
        weights_used: weights,
    }
}
