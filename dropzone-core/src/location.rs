//! Location records as supplied by a POI dataset.
//!
//! Every nested group is optional in the source JSON. An absent group
//! deserialises to its `Default`, which means zero counts, `false` flags,
//! no vehicles, and `Unknown` categorical levels. An explicit `null` for a
//! group or a field resolves the same way as an absent one. That one
//! resolution step at the boundary is the only place defaults are applied.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{CenterDistance, FightViability, Popularity, TagOpportunities};

/// Whether a location is a named point of interest or a smaller landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    /// A named point of interest shown on the map.
    NamedPoi,
    /// An unnamed or minor landmark.
    Landmark,
}

impl LocationKind {
    /// Return the dataset label for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NamedPoi => "named_poi",
            Self::Landmark => "landmark",
        }
    }
}

/// Rotation characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationData {
    /// Distance from the typical map centre.
    pub center_distance: CenterDistance,
}

/// Traversal aids available at the location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Mobility {
    /// Number of launch pads.
    #[serde(deserialize_with = "null_as_default")]
    pub launch_pads: u32,
    /// Whether a hot-air-balloon station is present.
    #[serde(deserialize_with = "null_as_default")]
    pub hot_air_balloon_station: bool,
    /// Number of ziplines.
    #[serde(deserialize_with = "null_as_default")]
    pub ziplines: u32,
    /// Vehicle types that spawn at the location.
    #[serde(deserialize_with = "null_as_default")]
    pub vehicles: Vec<String>,
    /// Whether wingsuits are available.
    #[serde(deserialize_with = "null_as_default")]
    pub wingsuits: bool,
}

/// Loot container counts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Loot {
    /// Regular chests.
    #[serde(deserialize_with = "null_as_default")]
    pub chests: f64,
    /// Rare chests.
    #[serde(deserialize_with = "null_as_default")]
    pub rare_chests: f64,
    /// Ammo boxes.
    #[serde(deserialize_with = "null_as_default")]
    pub ammo_boxes: f64,
}

/// Shield source counts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Shields {
    /// Slurp barrels.
    #[serde(deserialize_with = "null_as_default")]
    pub slurp_barrels: f64,
    /// Slurp trucks.
    #[serde(deserialize_with = "null_as_default")]
    pub slurp_trucks: f64,
    /// Shield kegs.
    #[serde(deserialize_with = "null_as_default")]
    pub shield_kegs: f64,
    /// Vending machines.
    #[serde(deserialize_with = "null_as_default")]
    pub vending_machines: f64,
}

/// Farmable material ratings, each nominally `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Materials {
    /// Wood rating.
    #[serde(deserialize_with = "null_as_default")]
    pub wood: f64,
    /// Brick rating.
    #[serde(deserialize_with = "null_as_default")]
    pub brick: f64,
    /// Metal rating.
    #[serde(deserialize_with = "null_as_default")]
    pub metal: f64,
}

/// Opportunities to deal surge damage safely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SurgePotential {
    /// Chance of tagging passing teams.
    pub tag_opportunities: TagOpportunities,
    /// How winnable an early fight is.
    pub early_fight_viability: FightViability,
    /// Number of safe angles to shoot from.
    #[serde(deserialize_with = "null_as_default")]
    pub safe_angles: f64,
}

/// Contest expectations for the location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestData {
    /// How many teams usually land here.
    pub popularity: Popularity,
    /// Percentage string such as `"35%"`.
    pub offspawn_fight_likelihood: Option<String>,
}

/// A landable location and everything known about it.
///
/// # Examples
///
/// ```
/// use dropzone_core::{Location, LocationKind, Loot};
///
/// let location = Location::new("lazy_lagoon", "Lazy Lagoon", LocationKind::NamedPoi)
///     .with_loot(Loot { chests: 20.0, ..Loot::default() });
/// assert_eq!(location.loot.chests, 20.0);
/// assert_eq!(location.shields.slurp_trucks, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier within a collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Named POI or landmark.
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// Rotation characteristics.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rotation_data: RotationData,
    /// Traversal aids.
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobility: Mobility,
    /// Loot containers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub loot: Loot,
    /// Shield sources.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shields: Shields,
    /// Material ratings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub materials: Materials,
    /// Surge opportunities.
    #[serde(default, deserialize_with = "null_as_default")]
    pub surge_potential: SurgePotential,
    /// Contest expectations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contest_data: ContestData,
}

/// Deserialise an explicit `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Location {
    /// Construct a location with every optional group at its default.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            rotation_data: RotationData::default(),
            mobility: Mobility::default(),
            loot: Loot::default(),
            shields: Shields::default(),
            materials: Materials::default(),
            surge_potential: SurgePotential::default(),
            contest_data: ContestData::default(),
        }
    }

    /// Replace the rotation data.
    #[must_use]
    pub fn with_rotation(mut self, rotation_data: RotationData) -> Self {
        self.rotation_data = rotation_data;
        self
    }

    /// Replace the mobility group.
    #[must_use]
    pub fn with_mobility(mut self, mobility: Mobility) -> Self {
        self.mobility = mobility;
        self
    }

    /// Replace the loot group.
    #[must_use]
    pub fn with_loot(mut self, loot: Loot) -> Self {
        self.loot = loot;
        self
    }

    /// Replace the shields group.
    #[must_use]
    pub fn with_shields(mut self, shields: Shields) -> Self {
        self.shields = shields;
        self
    }

    /// Replace the materials group.
    #[must_use]
    pub fn with_materials(mut self, materials: Materials) -> Self {
        self.materials = materials;
        self
    }

    /// Replace the surge group.
    #[must_use]
    pub fn with_surge(mut self, surge_potential: SurgePotential) -> Self {
        self.surge_potential = surge_potential;
        self
    }

    /// Replace the contest group.
    #[must_use]
    pub fn with_contest(mut self, contest_data: ContestData) -> Self {
        self.contest_data = contest_data;
        self
    }
}
