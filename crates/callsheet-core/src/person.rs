#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use callsheet_naming::names_match;

pub type PersonId = i64;

/// A person known to the press office: talent, journalists, photographers.
///
/// `name` is the natural key every other record joins on, even though a
/// numeric id exists. `film_titles` is a denormalized back-reference to film
/// titles, not a foreign-key list; it grows by merge through the traveler
/// sync and never shrinks automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub film_titles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speciality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accreditation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outlet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

impl Person {
    pub fn matches_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Whether this person is already associated with a film title
    /// (case-insensitive).
    pub fn has_film_title(&self, title: &str) -> bool {
        self.film_titles.iter().any(|t| names_match(t, title))
    }
}

/// Up to three contact roles attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal: Option<ContactCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publicist: Option<ContactCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub studio_rep: Option<ContactCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ContactCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
