use std::collections::HashMap;

use callsheet_core::{Film, FilmId, Person, PersonId, StaffId, StaffMember, Venue, VenueId};
use callsheet_naming::name_key;
use tracing::debug;

/// The authoritative in-memory registry of festival entities.
///
/// Holds the four collections for the lifetime of the session. Constructed
/// once at startup, seeded from fixtures, and passed by reference to every
/// module that needs it; there is no global instance.
///
/// Name and title lookups go through key→id maps maintained on every
/// mutation, so the public API stays free-text while lookups avoid linear
/// scans. Duplicate names are tolerated: the maps insert with first-key-wins,
/// so the earliest record added keeps winning lookups.
#[derive(Debug, Clone, Default)]
pub struct FestivalStore {
    films: Vec<Film>,
    people: Vec<Person>,
    venues: Vec<Venue>,
    staff: Vec<StaffMember>,
    film_titles: HashMap<String, FilmId>,
    person_names: HashMap<String, PersonId>,
    venue_names: HashMap<String, VenueId>,
    staff_names: HashMap<String, StaffId>,
}

/// What an update-by-id actually did. A missing id leaves the collection
/// untouched (no insertion side effect); callers that care can check for
/// `NotFound`, callers that don't can drop the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Replaced,
    NotFound,
}

impl UpdateOutcome {
    pub fn is_replaced(self) -> bool {
        self == UpdateOutcome::Replaced
    }
}

impl FestivalStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Read surface
    // ========================================================================

    pub fn films(&self) -> &[Film] {
        &self.films
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    /// Venues a schedule can actually be assigned to: everything except the
    /// permanent "location not yet decided" sentinel.
    pub fn selectable_venues(&self) -> impl Iterator<Item = &Venue> {
        self.venues.iter().filter(|v| !v.is_tbd)
    }

    pub fn film_by_id(&self, id: FilmId) -> Option<&Film> {
        self.films.iter().find(|f| f.id == id)
    }

    pub fn person_by_id(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Case-insensitive lookup against the festival title or the
    /// original-language title. Returns `None` on a miss, never errors.
    pub fn film_by_title(&self, title: &str) -> Option<&Film> {
        let id = *self.film_titles.get(&name_key(title))?;
        self.film_by_id(id)
    }

    pub fn person_by_name(&self, name: &str) -> Option<&Person> {
        let id = *self.person_names.get(&name_key(name))?;
        self.person_by_id(id)
    }

    pub fn venue_by_name(&self, name: &str) -> Option<&Venue> {
        let id = *self.venue_names.get(&name_key(name))?;
        self.venues.iter().find(|v| v.id == id)
    }

    pub fn staff_by_name(&self, name: &str) -> Option<&StaffMember> {
        let id = *self.staff_names.get(&name_key(name))?;
        self.staff.iter().find(|s| s.id == id)
    }

    // ========================================================================
    // Write surface
    // ========================================================================

    /// Append a film. No uniqueness check on title; always succeeds.
    pub fn add_film(&mut self, film: Film) {
        debug!(id = film.id, title = %film.title, "film added");
        self.film_titles.entry(name_key(&film.title)).or_insert(film.id);
        if let Some(original) = &film.original_language_title {
            self.film_titles.entry(name_key(original)).or_insert(film.id);
        }
        self.films.push(film);
    }

    /// Append a person. No uniqueness check on name; always succeeds.
    ///
    /// This path deliberately does not deduplicate: the deduplicating way to
    /// get a person into the store is the traveler sync upsert
    /// ([`crate::sync::sync_travelers`]). Callers choosing this path own the
    /// duplicate risk.
    pub fn add_person(&mut self, person: Person) {
        debug!(id = person.id, name = %person.name, "person added");
        self.person_names.entry(name_key(&person.name)).or_insert(person.id);
        self.people.push(person);
    }

    /// Append a venue. The TBD sentinel is added like any other venue and is
    /// still resolvable by name; it is only excluded from
    /// [`selectable_venues`](Self::selectable_venues).
    pub fn add_venue(&mut self, venue: Venue) {
        debug!(id = venue.id, name = %venue.name, "venue added");
        self.venue_names.entry(name_key(&venue.name)).or_insert(venue.id);
        self.venues.push(venue);
    }

    /// Replace the staff collection wholesale. Staff is fixture-seeded only;
    /// no per-record mutation path exists.
    pub fn seed_staff(&mut self, staff: Vec<StaffMember>) {
        self.staff = staff;
        self.staff_names.clear();
        for member in &self.staff {
            self.staff_names.entry(name_key(&member.name)).or_insert(member.id);
        }
    }

    /// Replace the film whose id matches. A missing id is a no-op on the
    /// collection, reported through the returned [`UpdateOutcome`].
    pub fn update_film(&mut self, film: Film) -> UpdateOutcome {
        let Some(slot) = self.films.iter_mut().find(|f| f.id == film.id) else {
            debug!(id = film.id, "update for unknown film id ignored");
            return UpdateOutcome::NotFound;
        };
        *slot = film;
        self.reindex_films();
        UpdateOutcome::Replaced
    }

    /// Replace the person whose id matches; missing id is a reported no-op.
    pub fn update_person(&mut self, person: Person) -> UpdateOutcome {
        let Some(slot) = self.people.iter_mut().find(|p| p.id == person.id) else {
            debug!(id = person.id, "update for unknown person id ignored");
            return UpdateOutcome::NotFound;
        };
        *slot = person;
        self.reindex_people();
        UpdateOutcome::Replaced
    }

    /// Replace the venue whose id matches; missing id is a reported no-op.
    pub fn update_venue(&mut self, venue: Venue) -> UpdateOutcome {
        let Some(slot) = self.venues.iter_mut().find(|v| v.id == venue.id) else {
            debug!(id = venue.id, "update for unknown venue id ignored");
            return UpdateOutcome::NotFound;
        };
        *slot = venue;
        self.reindex_venues();
        UpdateOutcome::Replaced
    }

    // ========================================================================
    // Index maintenance
    // ========================================================================

    // Updates may rename an entity, which invalidates old keys; rebuilding
    // from scratch keeps first-added-wins semantics at festival-scale
    // collection sizes.

    fn reindex_films(&mut self) {
        self.film_titles.clear();
        for film in &self.films {
            self.film_titles.entry(name_key(&film.title)).or_insert(film.id);
            if let Some(original) = &film.original_language_title {
                self.film_titles.entry(name_key(original)).or_insert(film.id);
            }
        }
    }

    fn reindex_people(&mut self) {
        self.person_names.clear();
        for person in &self.people {
            self.person_names.entry(name_key(&person.name)).or_insert(person.id);
        }
    }

    fn reindex_venues(&mut self) {
        self.venue_names.clear();
        for venue in &self.venues {
            self.venue_names.entry(name_key(&venue.name)).or_insert(venue.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use callsheet_core::ScreenerAccess;
    use rstest::rstest;

    use super::*;

    fn film(id: FilmId, title: &str) -> Film {
        Film {
            id,
            title: title.to_string(),
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
            screener_access: ScreenerAccess::ScreeningsOnly,
        }
    }

    fn person(id: PersonId, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            role: "Director".to_string(),
            email: None,
            phone: None,
            film_titles: vec![],
            speciality: None,
            accreditation: None,
            outlet: None,
            notes: None,
            contact_info: None,
        }
    }

    fn venue(id: VenueId, name: &str, is_tbd: bool) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            address: "12 Grand Ave".to_string(),
            houses: vec![],
            color: String::new(),
            is_tbd,
        }
    }

    #[rstest]
    #[case("Sarah Johnson")]
    #[case("sarah johnson")]
    #[case("SARAH JOHNSON")]
    #[case("  Sarah Johnson ")]
    fn lookups_are_case_insensitive(#[case] query: &str) {
        let mut store = FestivalStore::new();
        store.add_person(person(1, "Sarah Johnson"));
        store.add_film(film(7, "Rita"));

        assert_eq!(store.person_by_name(query).map(|p| p.id), Some(1));
        assert_eq!(store.film_by_title("rita").map(|f| f.id), Some(7));
    }

    #[test]
    fn film_lookup_matches_original_language_title() {
        let mut store = FestivalStore::new();
        let mut f = film(2, "The Room Next Door");
        f.original_language_title = Some("La Habitación de al Lado".to_string());
        store.add_film(f);

        assert_eq!(store.film_by_title("la habitación de al lado").map(|f| f.id), Some(2));
        assert_eq!(store.film_by_title("the room next door").map(|f| f.id), Some(2));
    }

    #[test]
    fn lookup_miss_returns_none() {
        let store = FestivalStore::new();
        assert!(store.film_by_title("Nonexistent Film").is_none());
        assert!(store.person_by_name("Nobody").is_none());
        assert!(store.venue_by_name("Nowhere").is_none());
        assert!(store.staff_by_name("No One").is_none());
        assert!(store.film_by_id(99).is_none());
        assert!(store.person_by_id(99).is_none());
    }

    #[test]
    fn update_with_missing_id_leaves_collection_unchanged() {
        let mut store = FestivalStore::new();
        store.add_film(film(1, "Rita"));

        let before = store.films().to_vec();
        let outcome = store.update_film(film(42, "Ghost Entry"));

        assert_eq!(outcome, UpdateOutcome::NotFound);
        assert_eq!(store.films(), &before[..]);
        assert!(store.film_by_title("Ghost Entry").is_none());
    }

    #[test]
    fn update_replaces_record_and_reindexes_titles() {
        let mut store = FestivalStore::new();
        store.add_film(film(1, "Working Title"));

        let outcome = store.update_film(film(1, "Final Title"));

        assert!(outcome.is_replaced());
        assert_eq!(store.films().len(), 1);
        assert!(store.film_by_title("Working Title").is_none());
        assert_eq!(store.film_by_title("final title").map(|f| f.id), Some(1));
    }

    #[test]
    fn update_person_rename_moves_name_key() {
        let mut store = FestivalStore::new();
        store.add_person(person(1, "Sara Johnson"));

        store.update_person(person(1, "Sarah Johnson"));

        assert!(store.person_by_name("Sara Johnson").is_none());
        assert_eq!(store.person_by_name("sarah johnson").map(|p| p.id), Some(1));
    }

    #[test]
    fn duplicate_names_resolve_to_first_added() {
        let mut store = FestivalStore::new();
        store.add_person(person(1, "Mark Chen"));
        store.add_person(person(2, "mark chen"));

        assert_eq!(store.people().len(), 2);
        assert_eq!(store.person_by_name("Mark Chen").map(|p| p.id), Some(1));
    }

    #[test]
    fn tbd_sentinel_is_resolvable_but_not_selectable() {
        let mut store = FestivalStore::new();
        store.add_venue(venue(1, "Palace Cinema", false));
        store.add_venue(venue(2, "TBD", true));

        assert_eq!(store.venue_by_name("tbd").map(|v| v.id), Some(2));
        let selectable: Vec<_> = store.selectable_venues().map(|v| v.id).collect();
        assert_eq!(selectable, vec![1]);
    }

    #[test]
    fn seed_staff_replaces_collection_and_index() {
        let mut store = FestivalStore::new();
        let member = StaffMember {
            id: 1,
            name: "Dana Ortiz".to_string(),
            title: "Publicity Coordinator".to_string(),
            email: "dana@festival.example".to_string(),
            phone: None,
            role: callsheet_core::StaffRole::PrTeam,
            permissions: Default::default(),
        };
        store.seed_staff(vec![member]);

        assert_eq!(store.staff_by_name("DANA ORTIZ").map(|s| s.id), Some(1));

        store.seed_staff(vec![]);
        assert!(store.staff_by_name("Dana Ortiz").is_none());
    }
}
