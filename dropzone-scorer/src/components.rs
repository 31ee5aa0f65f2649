//! The six component scorers.
//!
//! Each scorer reads one facet of a [`Location`] and returns a value in
//! `0.0..=10.0`. None of them can fail: absent data has already been
//! resolved to zero counts or `Unknown` levels when the record was decoded,
//! and `Unknown` levels score [`NEUTRAL_SCORE`].

use dropzone_core::{
    CenterDistance, Factor, FightViability, Location, Popularity, PresetWeights, TagOpportunities,
};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::normalize::{MAX_SCORE, NEUTRAL_SCORE, normalize};

/// Raw loot total considered a full-size POI.
const LOOT_CEILING: f64 = 50.0;
/// Raw shield total considered fully stocked.
const SHIELD_CEILING: f64 = 15.0;
/// Three material ratings of ten each.
const MATERIALS_CEILING: f64 = 30.0;
/// Likelihood assumed when the dataset gives none or an unreadable one.
const DEFAULT_OFFSPAWN_PERCENT: i32 = 50;

const fn distance_score(distance: CenterDistance) -> f64 {
    match distance {
        CenterDistance::VeryClose => 10.0,
        CenterDistance::Close => 8.0,
        CenterDistance::Medium => 6.0,
        CenterDistance::Far => 3.0,
        CenterDistance::VeryFar => 1.0,
        CenterDistance::Unknown => NEUTRAL_SCORE,
    }
}

const fn tag_score(level: TagOpportunities) -> f64 {
    match level {
        TagOpportunities::VeryHigh => 10.0,
        TagOpportunities::High => 8.0,
        TagOpportunities::Medium => 6.0,
        TagOpportunities::Low => 3.0,
        TagOpportunities::VeryLow => 1.0,
        TagOpportunities::None => 0.0,
        TagOpportunities::Unknown => NEUTRAL_SCORE,
    }
}

const fn fight_score(level: FightViability) -> f64 {
    match level {
        FightViability::Excellent => 10.0,
        FightViability::Good => 7.0,
        FightViability::Moderate => 5.0,
        FightViability::Poor => 2.0,
        FightViability::None => 0.0,
        FightViability::Unknown => NEUTRAL_SCORE,
    }
}

/// Quiet drops score high.
const fn popularity_score(level: Popularity) -> f64 {
    match level {
        Popularity::VeryLow => 10.0,
        Popularity::Low => 8.0,
        Popularity::LowMedium => 6.0,
        Popularity::Medium => 5.0,
        Popularity::High => 2.0,
        Popularity::VeryHigh => 0.0,
        Popularity::Unknown => NEUTRAL_SCORE,
    }
}

/// Score how easily a squad can rotate out of the location.
///
/// The centre-distance level sets a base score; each available traversal aid
/// adds a fixed bonus. The total is capped at [`MAX_SCORE`].
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "mobility bonuses accumulate onto the distance base"
)]
pub fn rotate_potential(location: &Location) -> f64 {
    let mobility = &location.mobility;
    let bonuses = [
        (mobility.launch_pads > 0, 1.0),
        (mobility.hot_air_balloon_station, 0.5),
        (mobility.ziplines > 0, 0.3),
        (!mobility.vehicles.is_empty(), 0.5),
        (mobility.wingsuits, 0.3),
    ];
    let base = distance_score(location.rotation_data.center_distance);
    bonuses
        .into_iter()
        .filter(|&(available, _)| available)
        .fold(base, |score, (_, bonus)| score + bonus)
        .min(MAX_SCORE)
}

/// Score loot density; rare chests count double and ammo boxes count 0.3.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "loot containers are weighted")]
pub fn loot_quality(location: &Location) -> f64 {
    let loot = location.loot;
    let raw = loot.chests + loot.rare_chests * 2.0 + loot.ammo_boxes * 0.3;
    normalize(raw, 0.0, LOOT_CEILING)
}

/// Score shield access; a slurp truck is worth more than three barrels.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "shield sources are weighted")]
pub fn shield_availability(location: &Location) -> f64 {
    let shields = location.shields;
    let raw = shields.slurp_barrels * 1.5
        + shields.slurp_trucks * 5.0
        + shields.shield_kegs * 2.0
        + shields.vending_machines;
    normalize(raw, 0.0, SHIELD_CEILING)
}

/// Score the unweighted sum of the three material ratings.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "material ratings are summed")]
pub fn materials(location: &Location) -> f64 {
    let materials = location.materials;
    normalize(
        materials.wood + materials.brick + materials.metal,
        0.0,
        MATERIALS_CEILING,
    )
}

/// Score surge opportunities from tags, fight viability, and safe angles.
///
/// The rescaled sum is clamped into `0.0..=10.0`, so a negative `safe_angles`
/// count bottoms out at zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "surge sub-scores are summed and rescaled"
)]
pub fn surge_potential(location: &Location) -> f64 {
    let surge = location.surge_potential;
    let tags = tag_score(surge.tag_opportunities);
    let fight = fight_score(surge.early_fight_viability);
    let angles = surge.safe_angles * 1.5;
    ((tags + fight + angles) / 2.5).clamp(0.0, MAX_SCORE)
}

/// Score how safe the location is from contesting teams.
///
/// Averages the inverted popularity level with the inverted off-spawn fight
/// likelihood. Higher means safer.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "likelihood is inverted and averaged with popularity"
)]
pub fn contest_risk_inverse(location: &Location) -> f64 {
    let contest = &location.contest_data;
    let base = popularity_score(contest.popularity);
    let percent = offspawn_percent(contest.offspawn_fight_likelihood.as_deref());
    let offspawn = (1.0 - f64::from(percent) / 100.0) * MAX_SCORE;
    ((base + offspawn) / 2.0).clamp(0.0, MAX_SCORE)
}

fn offspawn_percent(raw: Option<&str>) -> i32 {
    let Some(text) = raw else {
        return DEFAULT_OFFSPAWN_PERCENT;
    };
    parse_leading_int(text).unwrap_or_else(|| {
        debug!("unreadable off-spawn likelihood {text:?}; assuming {DEFAULT_OFFSPAWN_PERCENT}%");
        DEFAULT_OFFSPAWN_PERCENT
    })
}

/// Read the integer at the start of `text`, ignoring whatever follows.
///
/// Leading whitespace and one sign character are accepted, so `" 35%"`
/// reads as 35 and `"12.5%"` as 12. Out-of-range values saturate.
pub(crate) fn parse_leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let sign_len = trimmed.len().saturating_sub(unsigned.len());
    if sign_len > 1 {
        return None;
    }
    let digit_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digit_len == 0 {
        return None;
    }
    let number = trimmed.get(..sign_len.saturating_add(digit_len))?;
    match number.parse::<i32>() {
        Ok(value) => Some(value),
        Err(_) if trimmed.starts_with('-') => Some(i32::MIN),
        Err(_) => Some(i32::MAX),
    }
}

/// All six component scores for one location.
///
/// Serialises as an object keyed by factor name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// See [`rotate_potential`].
    pub rotate_potential: f64,
    /// See [`loot_quality`].
    pub loot_quality: f64,
    /// See [`shield_availability`].
    pub shield_availability: f64,
    /// See [`materials`].
    pub materials: f64,
    /// See [`surge_potential`].
    pub surge_potential: f64,
    /// See [`contest_risk_inverse`].
    pub contest_risk_inverse: f64,
}

impl ComponentScores {
    /// Run every component scorer against `location`.
    #[must_use]
    pub fn for_location(location: &Location) -> Self {
        Self {
            rotate_potential: rotate_potential(location),
            loot_quality: loot_quality(location),
            shield_availability: shield_availability(location),
            materials: materials(location),
            surge_potential: surge_potential(location),
            contest_risk_inverse: contest_risk_inverse(location),
        }
    }

    /// Return the score for one factor.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::RotatePotential => self.rotate_potential,
            Factor::LootQuality => self.loot_quality,
            Factor::ShieldAvailability => self.shield_availability,
            Factor::Materials => self.materials,
            Factor::SurgePotential => self.surge_potential,
            Factor::ContestRiskInverse => self.contest_risk_inverse,
        }
    }

    /// Unrounded weighted sum, accumulated in weight-table order.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "composite is a weighted sum of components"
    )]
    pub fn weighted_sum(&self, weights: &PresetWeights) -> f64 {
        weights
            .iter()
            .fold(0.0, |total, (factor, weight)| total + self.get(factor) * weight)
    }
}
