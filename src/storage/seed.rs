//! Module to build a catalog from a seed document

use std::path::Path;

use serde::Deserialize;

use crate::{
    domain::{
        playlist::Playlist,
        track::{Track, TrackMetadata},
    },
    storage::{catalog::Catalog, error::CatalogError},
};

const DEMO_LIBRARY: &str = include_str!("demo_library.toml");

/// Serialized form of a whole catalog. Record order becomes catalog order.
#[derive(Debug, Deserialize, Default)]
pub struct Seed {
    #[serde(default)]
    pub tracks: Vec<TrackRecord>,
    #[serde(default)]
    pub playlists: Vec<PlaylistRecord>,
}

#[derive(Debug, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    #[serde(flatten)]
    pub metadata: TrackMetadata,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistRecord {
    pub id: String,
    /// Optional in the document. A missing name becomes `""`, so the summary
    /// line reads `p01:  - 0 tracks`.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tracks: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Toml,
    Json,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat(
                path.to_string_lossy().into_owned(),
            )),
        }
    }
}

impl Seed {
    pub fn parse(contents: &str, format: SeedFormat) -> Result<Self, CatalogError> {
        Ok(match format {
            SeedFormat::Toml => toml::from_str(contents)?,
            SeedFormat::Json => serde_json::from_str(contents)?,
        })
    }

    /// Converts records into a catalog; generated ids will have `id_len` digits
    pub fn into_catalog(self, id_len: usize) -> Result<Catalog, CatalogError> {
        let catalog = Catalog::with_id_len(id_len).with_records(
            self.tracks
                .into_iter()
                .map(|record| Track::new(record.id, record.metadata)),
            self.playlists
                .into_iter()
                .map(|record| Playlist::new(record.id, record.name).with_tracks(record.tracks)),
        )?;

        log::debug!(
            "catalog loaded with {} tracks and {} playlists",
            catalog.tracks().len(),
            catalog.playlists().len()
        );
        Ok(catalog)
    }
}

/// Reads a `.toml` or `.json` seed file
pub fn load(path: &Path, id_len: usize) -> Result<Catalog, CatalogError> {
    let format = SeedFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    Seed::parse(&contents, format)?.into_catalog(id_len)
}

/// The built-in sample library: three tracks and four playlists,
/// one of them empty and one with a dangling reference
pub fn demo(id_len: usize) -> Result<Catalog, CatalogError> {
    Seed::parse(DEMO_LIBRARY, SeedFormat::Toml)?.into_catalog(id_len)
}
