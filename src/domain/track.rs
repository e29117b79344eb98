use serde::Deserialize;

use super::id::TrackId;

/// Represent a music track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub metadata: TrackMetadata,
}

/// Descriptive fields of a track. Any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TrackMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub album: Option<String>,
}

/// Returns the value only if it is present and non-empty.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl Track {
    pub fn new(id: impl Into<TrackId>, metadata: TrackMetadata) -> Self {
        Self {
            id: id.into(),
            metadata,
        }
    }

    pub fn name(&self) -> Option<&str> {
        present(self.metadata.name.as_deref())
    }

    pub fn artist(&self) -> Option<&str> {
        present(self.metadata.artist.as_deref())
    }

    pub fn album(&self) -> Option<&str> {
        present(self.metadata.album.as_deref())
    }
}

#[cfg(test)]
impl TrackMetadata {
    pub fn new(name: &str, artist: &str, album: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            artist: Some(artist.to_string()),
            album: Some(album.to_string()),
        }
    }
}
