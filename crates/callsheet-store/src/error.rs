use thiserror::Error;

/// A dangling name/title reference found by the integrity checks.
///
/// These escalate hard so broken references cannot silently ship in fixture
/// data. Production read paths never raise them: a lookup miss there is
/// ordinary data, rendered as unlinked text.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("{0} references unknown person '{1}'")]
    UnknownPerson(String, String),
    #[error("{0} references unknown film '{1}'")]
    UnknownFilm(String, String),
    #[error("{0} references unknown venue '{1}'")]
    UnknownVenue(String, String),
    #[error("{0} references unknown staff member '{1}'")]
    UnknownStaff(String, String),
}
