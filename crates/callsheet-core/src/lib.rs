pub mod film;
pub mod modules;
pub mod person;
pub mod staff;
pub mod venue;

pub use film::{Crew, Film, FilmId, Production, ScreenerAccess};
pub use modules::{
    CarpetEvent, Interview, ModuleRecords, PhotoShoot, Screening, Traveler,
};
pub use person::{ContactCard, ContactInfo, Person, PersonId};
pub use staff::{AccessLevel, StaffId, StaffMember, StaffRole};
pub use venue::{House, Venue, VenueId};
