//! Development-time integrity checks for name-based joins.
//!
//! None of these are runtime constraints: production paths treat a lookup
//! miss as ordinary data. These helpers exist so authoring mistakes ("typed
//! a name that doesn't exist yet") and broken fixtures are caught before
//! they become permanently dangling references. Each call is a pure function
//! of current store contents plus its arguments.

use callsheet_core::ModuleRecords;
use callsheet_naming::split_name_list;

use crate::error::IntegrityError;
use crate::store::FestivalStore;

pub fn person_exists(store: &FestivalStore, name: &str) -> bool {
    store.person_by_name(name).is_some()
}

pub fn film_exists(store: &FestivalStore, title: &str) -> bool {
    store.film_by_title(title).is_some()
}

pub fn venue_exists(store: &FestivalStore, name: &str) -> bool {
    store.venue_by_name(name).is_some()
}

pub fn staff_exists(store: &FestivalStore, name: &str) -> bool {
    store.staff_by_name(name).is_some()
}

/// A comma-separated people field partitioned against the person collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeopleListReport {
    pub known: Vec<String>,
    pub unknown: Vec<String>,
}

impl PeopleListReport {
    pub fn is_clean(&self) -> bool {
        self.unknown.is_empty()
    }
}

/// Split a free-text people field and sort each name into known/unknown.
/// Names keep their typed spelling; only the membership test is folded.
pub fn check_people_list(store: &FestivalStore, field: &str) -> PeopleListReport {
    let mut report = PeopleListReport::default();
    for name in split_name_list(field) {
        if person_exists(store, &name) {
            report.known.push(name);
        } else {
            report.unknown.push(name);
        }
    }
    report
}

/// Batch-check every name/title/venue reference in the module-local
/// collections against the store, failing on the first dangling one.
///
/// Intended for fixture data in development builds — the loader gates the
/// call on `debug_assertions`. Traveler names are deliberately not checked:
/// travelers are allowed to be new people (the sync path creates them), only
/// their film references must resolve.
pub fn check_module_records(
    store: &FestivalStore,
    records: &ModuleRecords,
) -> Result<(), IntegrityError> {
    for event in &records.carpet_events {
        let label = format!("carpet event '{}'", event.title);
        check_venue(store, &label, &event.venue)?;
        check_people_field(store, &label, &event.talent)?;
    }

    for shoot in &records.photo_shoots {
        let label = format!("photo shoot '{}'", shoot.title);
        check_venue(store, &label, &shoot.venue)?;
        check_people_field(store, &label, &shoot.subjects)?;
        if let Some(title) = &shoot.film_title {
            check_film(store, &label, title)?;
        }
    }

    for screening in &records.screenings {
        let label = format!("screening of '{}'", screening.film_title);
        check_film(store, &label, &screening.film_title)?;
        check_venue(store, &label, &screening.venue)?;
        if let Some(name) = &screening.staff_assigned {
            if !staff_exists(store, name) {
                return Err(IntegrityError::UnknownStaff(label, name.clone()));
            }
        }
    }

    for interview in &records.interviews {
        let label = format!("interview with '{}'", interview.talent);
        check_person(store, &label, &interview.journalist)?;
        check_person(store, &label, &interview.talent)?;
        check_venue(store, &label, &interview.location)?;
        if let Some(title) = &interview.film_title {
            check_film(store, &label, title)?;
        }
    }

    for traveler in &records.travelers {
        if let Some(title) = &traveler.film_title {
            let label = format!("traveler '{}'", traveler.name);
            check_film(store, &label, title)?;
        }
    }

    Ok(())
}

fn check_person(store: &FestivalStore, label: &str, name: &str) -> Result<(), IntegrityError> {
    if person_exists(store, name) {
        Ok(())
    } else {
        Err(IntegrityError::UnknownPerson(label.to_string(), name.to_string()))
    }
}

fn check_people_field(
    store: &FestivalStore,
    label: &str,
    field: &str,
) -> Result<(), IntegrityError> {
    for name in split_name_list(field) {
        check_person(store, label, &name)?;
    }
    Ok(())
}

fn check_film(store: &FestivalStore, label: &str, title: &str) -> Result<(), IntegrityError> {
    if film_exists(store, title) {
        Ok(())
    } else {
        Err(IntegrityError::UnknownFilm(label.to_string(), title.to_string()))
    }
}

fn check_venue(store: &FestivalStore, label: &str, name: &str) -> Result<(), IntegrityError> {
    if venue_exists(store, name) {
        Ok(())
    } else {
        Err(IntegrityError::UnknownVenue(label.to_string(), name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use callsheet_core::{
        CarpetEvent, Film, Person, ScreenerAccess, Screening, Venue,
    };
    use chrono::{NaiveDate, NaiveTime};

    use super::*;

    fn store_with_basics() -> FestivalStore {
        let mut store = FestivalStore::new();
        store.add_film(Film {
            id: 1,
            title: "Rita".to_string(),
            original_language_title: None,
            director: "Paz Vega".to_string(),
            countries: vec![],
            programs: vec![],
            genres: vec![],
            cast: vec![],
            runtime_minutes: 95,
            language: "Spanish".to_string(),
            subtitles: true,
            original_release_year: 2024,
            premiere_status: String::new(),
            crew: None,
            production: None,
            screener_access: ScreenerAccess::Cinesend,
        });
        store.add_person(Person {
            id: 1,
            name: "Paz Vega".to_string(),
            role: "Director".to_string(),
            email: None,
            phone: None,
            film_titles: vec!["Rita".to_string()],
            speciality: None,
            accreditation: None,
            outlet: None,
            notes: None,
            contact_info: None,
        });
        store.add_venue(Venue {
            id: 1,
            name: "Palace Cinema".to_string(),
            address: "12 Grand Ave".to_string(),
            houses: vec![],
            color: String::new(),
            is_tbd: false,
        });
        store
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    }

    fn time() -> NaiveTime {
        NaiveTime::from_hms_opt(19, 30, 0).unwrap()
    }

    #[test]
    fn people_list_partitions_known_and_unknown() {
        let store = store_with_basics();
        let report = check_people_list(&store, "paz vega, Sarah Johnson, ");

        assert_eq!(report.known, vec!["paz vega"]);
        assert_eq!(report.unknown, vec!["Sarah Johnson"]);
        assert!(!report.is_clean());
        assert!(check_people_list(&store, "Paz Vega").is_clean());
    }

    #[test]
    fn clean_module_records_pass() {
        let store = store_with_basics();
        let records = ModuleRecords {
            carpet_events: vec![CarpetEvent {
                id: 1,
                title: "Opening Night".to_string(),
                date: date(),
                time: time(),
                venue: "Palace Cinema".to_string(),
                talent: "Paz Vega".to_string(),
                description: None,
            }],
            screenings: vec![Screening {
                id: 1,
                film_title: "rita".to_string(),
                date: date(),
                time: time(),
                venue: "palace cinema".to_string(),
                house: None,
                staff_assigned: None,
                description: None,
            }],
            ..Default::default()
        };

        assert!(check_module_records(&store, &records).is_ok());
    }

    #[test]
    fn dangling_talent_name_escalates() {
        let store = store_with_basics();
        let records = ModuleRecords {
            carpet_events: vec![CarpetEvent {
                id: 1,
                title: "Opening Night".to_string(),
                date: date(),
                time: time(),
                venue: "Palace Cinema".to_string(),
                talent: "Paz Vega, Sarah Johnson".to_string(),
                description: None,
            }],
            ..Default::default()
        };

        let err = check_module_records(&store, &records).unwrap_err();
        assert!(matches!(err, IntegrityError::UnknownPerson(_, name) if name == "Sarah Johnson"));
    }

    #[test]
    fn dangling_screening_venue_escalates() {
        let store = store_with_basics();
        let records = ModuleRecords {
            screenings: vec![Screening {
                id: 1,
                film_title: "Rita".to_string(),
                date: date(),
                time: time(),
                venue: "Rooftop Annex".to_string(),
                house: None,
                staff_assigned: None,
                description: None,
            }],
            ..Default::default()
        };

        let err = check_module_records(&store, &records).unwrap_err();
        assert!(matches!(err, IntegrityError::UnknownVenue(_, name) if name == "Rooftop Annex"));
    }

    #[test]
    fn traveler_names_are_not_checked_but_films_are() {
        let store = store_with_basics();
        let mut records = ModuleRecords {
            travelers: vec![callsheet_core::Traveler {
                name: "Steve McQueen".to_string(),
                role: "Director".to_string(),
                email: None,
                phone: None,
                film_title: Some("Rita".to_string()),
                is_local: false,
                arrival: None,
                departure: None,
            }],
            ..Default::default()
        };
        assert!(check_module_records(&store, &records).is_ok());

        records.travelers[0].film_title = Some("Blitz".to_string());
        let err = check_module_records(&store, &records).unwrap_err();
        assert!(matches!(err, IntegrityError::UnknownFilm(_, title) if title == "Blitz"));
    }
}
