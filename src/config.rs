use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::id::DEFAULT_ID_LEN;

const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub version: u32,
    #[serde(default)]
    pub catalog: CatalogSource,
    #[serde(default)]
    pub ids: IdConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.to_string_lossy()))?;
        let mut cfg: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config TOML")?;
        anyhow::ensure!(
            cfg.version == CONFIG_VERSION,
            "unsupported config version {}, expected {CONFIG_VERSION}",
            cfg.version
        );

        // a relative catalog path is relative to the config file
        if let Some(dir) = path.parent() {
            cfg.catalog.path = cfg
                .catalog
                .path
                .take()
                .map(|p| if p.is_relative() { dir.join(p) } else { p });
        }
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: CatalogSource::default(),
            ids: IdConfig::default(),
        }
    }
}

/// Where the library comes from. Without a path the built-in demo library is used.
#[derive(Debug, Deserialize, Default)]
pub struct CatalogSource {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct IdConfig {
    /// hex digits in generated track and playlist ids
    #[serde(default = "default_id_length")]
    pub length: usize,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            length: default_id_length(),
        }
    }
}

fn default_id_length() -> usize {
    DEFAULT_ID_LEN
}
