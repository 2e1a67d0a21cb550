pub mod error;
pub mod store;
pub mod sync;
pub mod validate;

pub use error::IntegrityError;
pub use store::{FestivalStore, UpdateOutcome};
pub use sync::{TRAVELER_ID_BASE, sync_travelers};
pub use validate::{
    PeopleListReport, check_module_records, check_people_list, film_exists, person_exists,
    staff_exists, venue_exists,
};
