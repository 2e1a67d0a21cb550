use callsheet_core::{PersonId, Traveler};
use callsheet_store::FestivalStore;
use chrono::NaiveDate;

/// A person's travel status for the detail modal: local guest, or visiting
/// with whatever arrival/departure dates the travel module has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelSummary {
    Local,
    Visiting {
        arrival: Option<NaiveDate>,
        departure: Option<NaiveDate>,
    },
}

/// Look up a person's travel record by name. `None` when the person is
/// unknown or has no row in the travel module — no defaults are fabricated.
pub fn travel_summary(
    store: &FestivalStore,
    travelers: &[Traveler],
    person_id: PersonId,
) -> Option<TravelSummary> {
    let person = store.person_by_id(person_id)?;
    let traveler = travelers.iter().find(|t| person.matches_name(&t.name))?;

    Some(if traveler.is_local {
        TravelSummary::Local
    } else {
        TravelSummary::Visiting {
            arrival: traveler.arrival,
            departure: traveler.departure,
        }
    })
}
