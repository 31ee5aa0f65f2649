//! Scoring factors and the built-in weight presets.
//!
//! A [`Preset`] names a playstyle; its [`PresetWeights`] assign a weight to
//! each [`Factor`]. Weights in every built-in preset sum to one, so a
//! composite score stays on the same `0..=10` scale as its components.
//!
//! # Examples
//! ```
//! use dropzone_core::{Factor, Preset};
//!
//! let weights = Preset::SuperSafe.weights();
//! assert_eq!(weights.get(Factor::ContestRiskInverse), 0.25);
//! assert_eq!(Preset::resolve("no_such_preset"), Preset::Balanced);
//! ```

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One facet of a location that contributes to its composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Ease of rotating towards the zone.
    RotatePotential,
    /// Quantity and quality of loot.
    LootQuality,
    /// Access to shield sources.
    ShieldAvailability,
    /// Farmable building materials.
    Materials,
    /// Chances to deal surge damage safely.
    SurgePotential,
    /// Safety from contesting teams.
    ContestRiskInverse,
}

impl Factor {
    /// Every factor in weight-table order.
    pub const ALL: [Self; 6] = [
        Self::RotatePotential,
        Self::LootQuality,
        Self::ShieldAvailability,
        Self::Materials,
        Self::SurgePotential,
        Self::ContestRiskInverse,
    ];

    /// Return the snake-case key used in serialised tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RotatePotential => "rotate_potential",
            Self::LootQuality => "loot_quality",
            Self::ShieldAvailability => "shield_availability",
            Self::Materials => "materials",
            Self::SurgePotential => "surge_potential",
            Self::ContestRiskInverse => "contest_risk_inverse",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight assigned to each factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetWeights {
    /// Weight of [`Factor::RotatePotential`].
    pub rotate_potential: f64,
    /// Weight of [`Factor::LootQuality`].
    pub loot_quality: f64,
    /// Weight of [`Factor::ShieldAvailability`].
    pub shield_availability: f64,
    /// Weight of [`Factor::Materials`].
    pub materials: f64,
    /// Weight of [`Factor::SurgePotential`].
    pub surge_potential: f64,
    /// Weight of [`Factor::ContestRiskInverse`].
    pub contest_risk_inverse: f64,
}

impl PresetWeights {
    /// Rotation-first weighting for ordinary games.
    pub const BALANCED: Self = Self {
        rotate_potential: 0.30,
        loot_quality: 0.20,
        shield_availability: 0.15,
        materials: 0.15,
        surge_potential: 0.10,
        contest_risk_inverse: 0.10,
    };

    /// Weighting that avoids contested drops at the cost of surge.
    pub const SUPER_SAFE: Self = Self {
        rotate_potential: 0.20,
        loot_quality: 0.15,
        shield_availability: 0.20,
        materials: 0.15,
        surge_potential: 0.05,
        contest_risk_inverse: 0.25,
    };

    /// Weighting that chases loot and surge tags.
    pub const RISKY_KEYING: Self = Self {
        rotate_potential: 0.20,
        loot_quality: 0.25,
        shield_availability: 0.15,
        materials: 0.10,
        surge_potential: 0.20,
        contest_risk_inverse: 0.10,
    };

    /// Return the weight for a factor.
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

    /// Iterate over `(factor, weight)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|factor| (factor, self.get(factor)))
    }

    /// Sum of all six weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, weight)| weight).sum()
    }
}

/// A named playstyle selecting one set of weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Rotation-first default.
    #[default]
    Balanced,
    /// Avoid contested drops.
    SuperSafe,
    /// Chase loot and surge.
    RiskyKeying,
}

impl Preset {
    /// Every built-in preset.
    pub const ALL: [Self; 3] = [Self::Balanced, Self::SuperSafe, Self::RiskyKeying];

    /// Return the preset name as used on the command line and in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::SuperSafe => "super_safe",
            Self::RiskyKeying => "risky_keying",
        }
    }

    /// Return the weights for this preset.
    #[must_use]
    pub const fn weights(self) -> PresetWeights {
        match self {
            Self::Balanced => PresetWeights::BALANCED,
            Self::SuperSafe => PresetWeights::SUPER_SAFE,
            Self::RiskyKeying => PresetWeights::RISKY_KEYING,
        }
    }

    /// Resolve a preset name, falling back to [`Preset::Balanced`].
    ///
    /// An unrecognised name is not an error; it is logged and replaced.
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: PresetParseError| {
            warn!("{err}; falling back to {}", Self::default());
            Self::default()
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a preset name is not one of the built-in presets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown preset '{name}' (expected balanced, super_safe or risky_keying)")]
pub struct PresetParseError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| PresetParseError { name: s.to_owned() })
    }
}

/// The full weight table, one entry per built-in preset.
///
/// Reports embed this so consumers can show how a ranking was weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    /// Weights of [`Preset::Balanced`].
    pub balanced: PresetWeights,
    /// Weights of [`Preset::SuperSafe`].
    pub super_safe: PresetWeights,
    /// Weights of [`Preset::RiskyKeying`].
    pub risky_keying: PresetWeights,
}

impl WeightTable {
    /// The built-in weight table.
    pub const BUILT_IN: Self = Self {
        balanced: PresetWeights::BALANCED,
        super_safe: PresetWeights::SUPER_SAFE,
        risky_keying: PresetWeights::RISKY_KEYING,
    };

    /// Return the weights recorded for a preset.
    #[must_use]
    pub const fn get(&self, preset: Preset) -> PresetWeights {
        match preset {
            Preset::Balanced => self.balanced,
            Preset::SuperSafe => self.super_safe,
            Preset::RiskyKeying => self.risky_keying,
        }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::BUILT_IN
    }
}
