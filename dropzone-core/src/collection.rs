//! The in-memory dataset snapshot the scorer ranks.

use std::collections::HashSet;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Location;
use crate::location::null_as_default;

/// Errors raised while decoding or validating a location collection.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The JSON payload could not be decoded.
    #[error("failed to decode location dataset")]
    Decode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A record has an empty identifier.
    #[error("{group} entry {index} has an empty id")]
    EmptyId {
        /// Group containing the record.
        group: &'static str,
        /// Position of the record within its group.
        index: usize,
    },
    /// A record has an empty display name.
    #[error("location '{id}' has an empty name")]
    EmptyName {
        /// Identifier of the offending record.
        id: String,
    },
    /// Two records share an identifier.
    #[error("location id '{id}' appears more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// Locations grouped the way the dataset file groups them.
///
/// Either group may be missing from the JSON; it then decodes as empty.
///
/// # Examples
///
/// ```
/// use dropzone_core::LocationCollection;
///
/// # fn main() -> Result<(), dropzone_core::DatasetError> {
/// let json = r#"{"named_pois":[{"id":"a","name":"A","type":"named_poi"}]}"#;
/// let collection = LocationCollection::from_json_str(json)?;
/// collection.validate()?;
/// assert_eq!(collection.len(), 1);
/// assert!(collection.landmarks.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationCollection {
    /// Named points of interest.
    #[serde(default, deserialize_with = "null_as_default")]
    pub named_pois: Vec<Location>,
    /// Landmarks.
    #[serde(default, deserialize_with = "null_as_default")]
    pub landmarks: Vec<Location>,
}

impl LocationCollection {
    /// Construct a collection from its two groups.
    #[must_use]
    pub const fn new(named_pois: Vec<Location>, landmarks: Vec<Location>) -> Self {
        Self {
            named_pois,
            landmarks,
        }
    }

    /// Decode a collection from a JSON string.
    ///
    /// # Errors
    /// Returns [`DatasetError::Decode`] when the payload is not a valid
    /// collection.
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        serde_json::from_str(json).map_err(|source| DatasetError::Decode { source })
    }

    /// Decode a collection from a reader yielding JSON.
    ///
    /// # Errors
    /// Returns [`DatasetError::Decode`] when reading or decoding fails.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        serde_json::from_reader(reader).map_err(|source| DatasetError::Decode { source })
    }

    /// Iterate over named POIs followed by landmarks.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.named_pois.iter().chain(self.landmarks.iter())
    }

    /// Total number of locations across both groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.named_pois.len().saturating_add(self.landmarks.len())
    }

    /// Report whether both groups are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.named_pois.is_empty() && self.landmarks.is_empty()
    }

    /// Find a location by identifier in either group.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Location> {
        self.iter().find(|location| location.id == id)
    }

    /// Check identity fields across both groups.
    ///
    /// Every record needs a non-blank id and name, and ids must be unique
    /// across the whole collection.
    ///
    /// # Errors
    /// Returns the first [`DatasetError`] encountered, in iteration order.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();
        let groups = [("named_pois", &self.named_pois), ("landmarks", &self.landmarks)];
        for (group, locations) in groups {
            for (index, location) in locations.iter().enumerate() {
                if location.id.trim().is_empty() {
                    return Err(DatasetError::EmptyId { group, index });
                }
                if location.name.trim().is_empty() {
                    return Err(DatasetError::EmptyName {
                        id: location.id.clone(),
                    });
                }
                if !seen.insert(location.id.as_str()) {
                    return Err(DatasetError::DuplicateId {
                        id: location.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
