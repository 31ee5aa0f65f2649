//! Core domain types for the Dropzone engine.
//!
//! These models describe the map locations a squad can land at, the
//! categorical ratings attached to them, and the weight presets used to
//! rank them. Every type deserialises leniently: an absent group or an
//! unrecognised label resolves to a documented default rather than an
//! error, so scoring code never has to second-guess its input.

#![forbid(unsafe_code)]

mod category;
mod collection;
mod location;
mod preset;

pub use category::{CenterDistance, FightViability, Popularity, TagOpportunities};
pub use collection::{DatasetError, LocationCollection};
pub use location::{
    ContestData, Location, LocationKind, Loot, Materials, Mobility, RotationData, Shields,
    SurgePotential,
};
pub use preset::{Factor, Preset, PresetParseError, PresetWeights, WeightTable};
