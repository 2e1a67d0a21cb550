pub mod config;
pub mod fixtures;

pub use config::{LoaderConfig, load_config_or_default};
pub use fixtures::{FixtureSet, load_and_seed, load_fixtures, seed};
