use thiserror::Error;

use crate::domain::id::{PlaylistId, TrackId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("track {0} not found")]
    TrackNotFound(TrackId),

    #[error("playlist {0} not found")]
    PlaylistNotFound(PlaylistId),

    #[error("track id {0} is already taken")]
    DuplicateTrack(TrackId),

    #[error("playlist id {0} is already taken")]
    DuplicatePlaylist(PlaylistId),

    #[error("invalid {kind} id {id:?}")]
    InvalidId { kind: &'static str, id: String },

    #[error("filesystem error: {0}")]
    Fs(#[from] std::io::Error),

    #[error("malformed TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported catalog file {0}, expected .toml or .json")]
    UnsupportedFormat(String),
}
