//! Monkey domain model.
//!
//! A monkey is a flat, read-only record describing one species. The full
//! collection is fetched once from the remote feed and never edited.

use serde::{Deserialize, Serialize};

/// One entry of the monkey collection.
///
/// Serialized with lowercase field names. The public feed publishes
/// PascalCase keys (`Name`, `Location`, ...), which are accepted as aliases.
/// Missing fields fall back to empty strings and zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Monkey {
    /// Identifier within the collection (assumed unique, not enforced)
    #[serde(alias = "Name")]
    pub name: String,

    /// Where the species lives
    #[serde(alias = "Location")]
    pub location: String,

    /// Free-text description
    #[serde(alias = "Details")]
    pub details: String,

    /// Image URI or path
    #[serde(alias = "Image")]
    pub image: String,

    /// Estimated population count
    #[serde(alias = "Population")]
    pub population: i64,

    #[serde(alias = "Latitude")]
    pub latitude: f64,

    #[serde(alias = "Longitude")]
    pub longitude: f64,
}

impl Monkey {
    /// Create a monkey with only a name and location set.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Builder-style population setter.
    pub fn with_population(mut self, population: i64) -> Self {
        self.population = population;
        self
    }

    /// Builder-style coordinate setter.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Exact, case-sensitive name match.
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
