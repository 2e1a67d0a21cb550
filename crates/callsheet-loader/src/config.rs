use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "callsheet.json";

const DEFAULT_FIXTURES_DIR: &str = "fixtures";

/// Project-level loader configuration, read from an optional
/// `callsheet.json` next to the fixture data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoaderConfig {
    #[serde(default)]
    pub fixtures_dir: Option<PathBuf>,
}

impl LoaderConfig {
    pub fn fixtures_dir(&self) -> &Path {
        self.fixtures_dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_FIXTURES_DIR))
    }
}

/// Read `callsheet.json` from the project root, falling back to defaults
/// when the file is absent.
pub fn load_config_or_default(root: &Path) -> Result<LoaderConfig> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(LoaderConfig::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse config: {}", path.display()))
}
