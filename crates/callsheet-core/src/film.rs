#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use callsheet_naming::names_match;

pub type FilmId = i64;

/// A film in the festival lineup.
///
/// `title` is the display key other records join on; `director` and `cast`
/// entries are free-text names resolved against the person registry at read
/// time. Ids are fixture-assigned and echoed back by the store, never
/// generated by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language_title: Option<String>,
    pub director: String,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub cast: Vec<String>,
    pub runtime_minutes: u32,
    pub language: String,
    pub subtitles: bool,
    pub original_release_year: i32,
    #[serde(default)]
    pub premiere_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<Crew>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production: Option<Production>,
    pub screener_access: ScreenerAccess,
}

impl Film {
    /// Whether a free-text title refers to this film, matching either the
    /// festival title or the original-language title.
    pub fn matches_title(&self, title: &str) -> bool {
        names_match(&self.title, title)
            || self
                .original_language_title
                .as_deref()
                .is_some_and(|t| names_match(t, title))
    }

    /// Whether a free-text person name is credited on this film as director
    /// or cast.
    pub fn credits_person(&self, name: &str) -> bool {
        names_match(&self.director, name) || self.cast.iter().any(|c| names_match(c, name))
    }
}

/// Named crew roles. Each is an independently resolved free-text name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Crew {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenwriter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cinematographer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive_producer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct Production {
    #[serde(default)]
    pub companies: Vec<String>,
}

/// How press can access a screener for this film.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ScreenerAccess {
    Cinesend,
    DirectLink,
    DistributorRequest,
    ScreeningsOnly,
}
