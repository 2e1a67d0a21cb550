use callsheet_core::{ModuleRecords, Person, PersonId};
use callsheet_naming::list_contains;
use callsheet_store::FestivalStore;
use chrono::{NaiveDate, NaiveTime};

/// One calendar-like row in a person's derived schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub title: String,
    pub kind: EntryKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: String,
    /// Originating-module tag, for the detail modal's grouping header.
    pub source: &'static str,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    RedCarpet,
    PhotoShoot,
    Screening,
    Interview,
}

/// Everything on a person's calendar, ascending by date then time.
///
/// Scans the red-carpet, photo, screening, and interview collections for
/// entries that reference the person by name. Screenings reach the person
/// through their film association: either the person's own `film_titles`
/// back-reference or the film record's director/cast credits. An unknown
/// person id yields an empty schedule.
pub fn person_schedule(
    store: &FestivalStore,
    records: &ModuleRecords,
    person_id: PersonId,
) -> Vec<ScheduleEntry> {
    let Some(person) = store.person_by_id(person_id) else {
        return Vec::new();
    };

    let mut entries = appearance_entries(person, records);

    for screening in &records.screenings {
        if !screening_features(store, person, &screening.film_title) {
            continue;
        }
        entries.push(ScheduleEntry {
            title: format!("Screening: {}", screening.film_title),
            kind: EntryKind::Screening,
            date: screening.date,
            time: screening.time,
            venue: screening.venue.clone(),
            source: "screenings",
            description: screening.description.clone(),
        });
    }

    for interview in &records.interviews {
        if !person.matches_name(&interview.journalist) && !person.matches_name(&interview.talent) {
            continue;
        }
        entries.push(ScheduleEntry {
            title: format!("Interview: {}", interview.talent),
            kind: EntryKind::Interview,
            date: interview.date,
            time: interview.time,
            venue: interview.location.clone(),
            source: "interviews",
            description: interview.notes.clone(),
        });
    }

    sort_chronologically(&mut entries);
    entries
}

/// The photography/red-carpet subset of a person's schedule, same ordering
/// contract as [`person_schedule`]. Empty when the person is unknown or has
/// no appearances.
pub fn person_appearances(
    store: &FestivalStore,
    records: &ModuleRecords,
    person_id: PersonId,
) -> Vec<ScheduleEntry> {
    let Some(person) = store.person_by_id(person_id) else {
        return Vec::new();
    };
    let mut entries = appearance_entries(person, records);
    sort_chronologically(&mut entries);
    entries
}

fn appearance_entries(person: &Person, records: &ModuleRecords) -> Vec<ScheduleEntry> {
    let mut entries = Vec::new();

    for event in &records.carpet_events {
        if !list_contains(&event.talent, &person.name) {
            continue;
        }
        entries.push(ScheduleEntry {
            title: event.title.clone(),
            kind: EntryKind::RedCarpet,
            date: event.date,
            time: event.time,
            venue: event.venue.clone(),
            source: "events",
            description: event.description.clone(),
        });
    }

    for shoot in &records.photo_shoots {
        if !list_contains(&shoot.subjects, &person.name) {
            continue;
        }
        entries.push(ScheduleEntry {
            title: shoot.title.clone(),
            kind: EntryKind::PhotoShoot,
            date: shoot.date,
            time: shoot.time,
            venue: shoot.venue.clone(),
            source: "photos",
            description: shoot.notes.clone(),
        });
    }

    entries
}

fn screening_features(store: &FestivalStore, person: &Person, film_title: &str) -> bool {
    if person.has_film_title(film_title) {
        return true;
    }
    store
        .film_by_title(film_title)
        .is_some_and(|film| film.credits_person(&person.name))
}

// Stable sort: entries sharing a slot keep module order, so repeated calls
// over unchanged data are element-wise identical.
fn sort_chronologically(entries: &mut [ScheduleEntry]) {
    entries.sort_by_key(|e| (e.date, e.time));
}
