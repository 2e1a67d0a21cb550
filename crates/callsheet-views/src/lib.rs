//! Read-only derived views over the festival registry.
//!
//! Every view here is a pure function of the store plus the module-local
//! record collections: nothing is cached, nothing is mutated, and calling a
//! view twice with no intervening change yields identical output. At
//! festival-scale cardinalities these are linear scans triggered at
//! modal-open time; a real index layer would only be warranted at a scale
//! this system does not target.

pub mod schedule;
pub mod travel;

pub use schedule::{EntryKind, ScheduleEntry, person_appearances, person_schedule};
pub use travel::{TravelSummary, travel_summary};
