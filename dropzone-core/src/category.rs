//! Closed categorical ratings attached to locations.
//!
//! Each rating is an ordinal scale with an explicit `Unknown` level. Labels
//! outside the scale, and an explicit `null`, map onto `Unknown` during
//! deserialisation, so a dataset typo degrades to a neutral score instead of
//! rejecting the whole file.
//!
//! # Examples
//! ```
//! use dropzone_core::CenterDistance;
//!
//! assert_eq!(CenterDistance::from_label("close"), CenterDistance::Close);
//! assert_eq!(CenterDistance::from_label("next door"), CenterDistance::Unknown);
//! assert_eq!(CenterDistance::VeryFar.to_string(), "very_far");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! categorical_level {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(from = "Option<String>", into = "String")]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
            /// Absent or unrecognised label.
            #[default]
            Unknown,
        }

        impl $name {
            /// Every recognised level in dataset order.
            pub const KNOWN: &'static [Self] = &[$(Self::$variant),+];

            /// Return the dataset label for this level.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Unknown => "unknown",
                }
            }

            /// Map a dataset label onto a level.
            ///
            /// Matching is exact; anything else becomes `Unknown`.
            #[must_use]
            pub fn from_label(label: &str) -> Self {
                match label {
                    $($label => Self::$variant,)+
                    _ => Self::Unknown,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self::from_label(&label)
            }
        }

        impl From<Option<String>> for $name {
            fn from(label: Option<String>) -> Self {
                label.as_deref().map_or(Self::Unknown, Self::from_label)
            }
        }

        impl From<$name> for String {
            fn from(level: $name) -> Self {
                level.as_str().to_owned()
            }
        }
    };
}

categorical_level! {
    /// How far a location sits from the typical map centre.
    CenterDistance {
        /// Practically on top of the centre.
        VeryClose => "very_close",
        /// A short rotation away.
        Close => "close",
        /// Mid-map.
        Medium => "medium",
        /// A long rotation.
        Far => "far",
        /// Map edge.
        VeryFar => "very_far",
    }
}

categorical_level! {
    /// Likelihood of tagging opponents early for surge damage.
    TagOpportunities {
        /// Constant third-party traffic.
        VeryHigh => "very_high",
        /// Reliable traffic.
        High => "high",
        /// Occasional traffic.
        Medium => "medium",
        /// Rare traffic.
        Low => "low",
        /// Almost never.
        VeryLow => "very_low",
        /// Isolated drop.
        None => "none",
    }
}

categorical_level! {
    /// How winnable an off-spawn fight is at the location.
    FightViability {
        /// Strong terrain and cover.
        Excellent => "excellent",
        /// Favourable.
        Good => "good",
        /// Even.
        Moderate => "moderate",
        /// Unfavourable.
        Poor => "poor",
        /// No realistic fight.
        None => "none",
    }
}

categorical_level! {
    /// How many teams typically contest the location.
    Popularity {
        /// Usually uncontested.
        VeryLow => "very_low",
        /// Occasionally shared.
        Low => "low",
        /// Shared in some lobbies.
        LowMedium => "low_medium",
        /// Regularly shared.
        Medium => "medium",
        /// Hot drop.
        High => "high",
        /// Contested every game.
        VeryHigh => "very_high",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("very_high", Popularity::VeryHigh)]
    #[case("low_medium", Popularity::LowMedium)]
    #[case("VERY_HIGH", Popularity::Unknown)]
    #[case("", Popularity::Unknown)]
    fn popularity_labels_map_exactly(#[case] label: &str, #[case] expected: Popularity) {
        assert_eq!(Popularity::from_label(label), expected);
    }

    #[rstest]
    fn known_levels_round_trip_through_labels() {
        for level in FightViability::KNOWN {
            assert_eq!(FightViability::from_label(level.as_str()), *level);
        }
    }

    #[rstest]
    fn unrecognised_label_deserialises_as_unknown() {
        let level: TagOpportunities =
            serde_json::from_str("\"plenty\"").expect("decode tag opportunities");
        assert_eq!(level, TagOpportunities::Unknown);
    }

    #[rstest]
    fn null_label_deserialises_as_unknown() {
        let level: Popularity = serde_json::from_str("null").expect("decode null popularity");
        assert_eq!(level, Popularity::Unknown);
    }

    #[rstest]
    fn none_level_is_distinct_from_unknown() {
        let level: TagOpportunities = serde_json::from_str("\"none\"").expect("decode none");
        assert_eq!(level, TagOpportunities::None);
        assert_ne!(level, TagOpportunities::Unknown);
    }

    #[rstest]
    fn serialises_as_dataset_label() {
        let json = serde_json::to_string(&CenterDistance::VeryClose).expect("encode distance");
        assert_eq!(json, "\"very_close\"");
    }
}
