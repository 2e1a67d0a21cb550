#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use callsheet_naming::names_match;

pub type VenueId = i64;

/// A festival venue. `name` is the key schedule and screening records join
/// on. A venue with `is_tbd` set is the permanent "location not yet decided"
/// sentinel and must stay out of real-venue selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub houses: Vec<House>,
    /// Presentation hint only.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_tbd: bool,
}

impl Venue {
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// A sub-venue (screening room, hall) inside a venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct House {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}
