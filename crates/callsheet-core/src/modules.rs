//! Record shapes owned by the feature modules (red carpet, photos,
//! screenings, interviews, travel).
//!
//! These collections live outside the entity store — each module keeps its
//! own list — but the aggregators scan them and the integrity validators
//! check their name/title fields, so their shapes are part of the shared
//! data contract. People fields (`talent`, `subjects`) are comma-separated
//! free text, exactly as typed into the authoring forms.

use chrono::{NaiveDate, NaiveTime};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct CarpetEvent {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    /// Comma-separated free-text names.
    #[serde(default)]
    pub talent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct PhotoShoot {
    pub id: i64,
    pub title: String,
    /// Comma-separated free-text names.
    #[serde(default)]
    pub subjects: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_title: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Screening {
    pub id: i64,
    pub film_title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_assigned: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Interview {
    pub id: i64,
    pub journalist: String,
    pub talent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_title: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A row in the travel module's local list. Travelers are keyed by name, not
/// id: the sync path upserts each one into the shared person collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Traveler {
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_title: Option<String>,
    #[serde(default)]
    pub is_local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<NaiveDate>,
}

/// All module-local collections, grouped for seeding, validation, and
/// aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ModuleRecords {
    #[serde(default)]
    pub carpet_events: Vec<CarpetEvent>,
    #[serde(default)]
    pub photo_shoots: Vec<PhotoShoot>,
    #[serde(default)]
    pub screenings: Vec<Screening>,
    #[serde(default)]
    pub interviews: Vec<Interview>,
    #[serde(default)]
    pub travelers: Vec<Traveler>,
}
