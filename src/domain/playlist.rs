use super::id::{PlaylistId, TrackId};

/// A named, ordered list of track references.
///
/// References are weak: a track id listed here may not exist in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: PlaylistId,
    pub name: String,
    pub tracks: Vec<TrackId>,
}

impl Playlist {
    pub fn new(id: impl Into<PlaylistId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn with_tracks<I, T>(mut self, tracks: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TrackId>,
    {
        self.tracks = tracks.into_iter().map(Into::into).collect();
        self
    }

    /// Number of referenced track ids, dangling ones included
    pub fn declared_len(&self) -> usize {
        self.tracks.len()
    }
}
