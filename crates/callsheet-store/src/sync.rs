//! Traveler sync: the one write path that runs automatically.
//!
//! The travel module owns its own traveler list; whenever that list changes
//! it is re-synced here so every traveler exists exactly once in the shared
//! person collection. This is the only duplicate-preventing path into that
//! collection — plain [`FestivalStore::add_person`] always appends.

use callsheet_core::{Person, PersonId, Traveler};
use tracing::debug;

use crate::store::FestivalStore;

/// Ids synthesized for people first seen in the travel module come from this
/// offset block, disjoint from fixture-assigned ids.
pub const TRAVELER_ID_BASE: PersonId = 10_000;

/// Upsert every traveler into the shared person collection by
/// case-insensitive name.
///
/// An unknown name becomes a new person carrying the traveler's role and
/// contact details, with `film_titles` seeded from the traveler's film if it
/// has one. A known name merges the traveler's film title into the existing
/// record's `film_titles` — merge, never replace — and leaves every other
/// field alone.
///
/// Idempotent: re-running over an unchanged list creates no records and no
/// duplicate film titles.
pub fn sync_travelers(store: &mut FestivalStore, travelers: &[Traveler]) {
    for traveler in travelers {
        sync_traveler(store, traveler);
    }
}

fn sync_traveler(store: &mut FestivalStore, traveler: &Traveler) {
    let Some(existing) = store.person_by_name(&traveler.name) else {
        let person = Person {
            id: next_traveler_id(store),
            name: traveler.name.clone(),
            role: traveler.role.clone(),
            email: traveler.email.clone(),
            phone: traveler.phone.clone(),
            film_titles: traveler.film_title.clone().into_iter().collect(),
            speciality: None,
            accreditation: None,
            outlet: None,
            notes: None,
            contact_info: None,
        };
        debug!(id = person.id, name = %person.name, "traveler synced as new person");
        store.add_person(person);
        return;
    };

    let Some(film_title) = traveler.film_title.as_deref() else {
        return;
    };
    if existing.has_film_title(film_title) {
        return;
    }

    let mut updated = existing.clone();
    updated.film_titles.push(film_title.to_string());
    debug!(id = updated.id, name = %updated.name, film = %film_title, "merged film title into existing person");
    store.update_person(updated);
}

fn next_traveler_id(store: &FestivalStore) -> PersonId {
    store
        .people()
        .iter()
        .map(|p| p.id)
        .filter(|id| *id >= TRAVELER_ID_BASE)
        .max()
        .map(|id| id + 1)
        .unwrap_or(TRAVELER_ID_BASE)
}
