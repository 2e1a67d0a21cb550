//! Fixture loading and one-shot store seeding.
//!
//! The registry's collections start empty and are populated exactly once per
//! session from fixture files — one YAML or JSON file per collection in the
//! fixtures directory. There is no on-disk state beyond these authored
//! files; everything is in-memory after the seed and lost on restart.
//!
//! In development builds the seed runs the integrity checks over the module
//! records, so fixtures referencing nonexistent entities fail loudly instead
//! of shipping dangling links.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use callsheet_core::{Film, ModuleRecords, Person, StaffMember, Venue};
use callsheet_store::{FestivalStore, check_module_records, sync_travelers};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Everything read from the fixtures directory, pre-seed.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub films: Vec<Film>,
    pub people: Vec<Person>,
    pub venues: Vec<Venue>,
    pub staff: Vec<StaffMember>,
    pub records: ModuleRecords,
}

/// Load every known collection file from the fixtures directory. Each
/// collection lives in `<stem>.yaml`, `<stem>.yml`, or `<stem>.json`; a
/// missing file means an empty collection, a malformed one is an error.
pub fn load_fixtures(dir: &Path) -> Result<FixtureSet> {
    Ok(FixtureSet {
        films: load_collection(dir, "films")?,
        people: load_collection(dir, "people")?,
        venues: load_collection(dir, "venues")?,
        staff: load_collection(dir, "staff")?,
        records: ModuleRecords {
            carpet_events: load_collection(dir, "carpet_events")?,
            photo_shoots: load_collection(dir, "photo_shoots")?,
            screenings: load_collection(dir, "screenings")?,
            interviews: load_collection(dir, "interviews")?,
            travelers: load_collection(dir, "travelers")?,
        },
    })
}

/// Build the session store from a fixture set.
///
/// Seeds the four entity collections, runs the development-only integrity
/// check over the module records, then performs the initial traveler sync so
/// every fixture traveler already exists in the person collection. Returns
/// the store together with the module-local records, which stay owned by
/// their feature modules.
pub fn seed(fixtures: FixtureSet) -> Result<(FestivalStore, ModuleRecords)> {
    let mut store = FestivalStore::new();
    for film in fixtures.films {
        store.add_film(film);
    }
    for person in fixtures.people {
        store.add_person(person);
    }
    for venue in fixtures.venues {
        store.add_venue(venue);
    }
    store.seed_staff(fixtures.staff);

    if cfg!(debug_assertions) {
        check_module_records(&store, &fixtures.records)
            .context("fixture integrity check failed")?;
    }

    sync_travelers(&mut store, &fixtures.records.travelers);

    debug!(
        films = store.films().len(),
        people = store.people().len(),
        venues = store.venues().len(),
        staff = store.staff().len(),
        "store seeded"
    );

    Ok((store, fixtures.records))
}

/// Convenience wrapper: resolve the fixtures directory from `callsheet.json`
/// under `root`, load, and seed.
pub fn load_and_seed(root: &Path) -> Result<(FestivalStore, ModuleRecords)> {
    let config = crate::config::load_config_or_default(root)?;
    let fixtures = load_fixtures(&root.join(config.fixtures_dir()))?;
    seed(fixtures)
}

fn load_collection<T: DeserializeOwned>(dir: &Path, stem: &str) -> Result<Vec<T>> {
    for ext in ["yaml", "yml", "json"] {
        let path = dir.join(format!("{stem}.{ext}"));
        if !path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("read fixture file: {}", path.display()))?;

        let parsed = if ext == "json" {
            serde_json::from_str(&content)
                .with_context(|| format!("parse JSON fixture: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parse YAML fixture: {}", path.display()))?
        };
        return Ok(parsed);
    }
    Ok(Vec::new())
}
