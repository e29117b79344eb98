use std::collections::HashMap;

use crate::{
    domain::{
        id::{DEFAULT_ID_LEN, PlaylistId, TrackId, generate_id},
        playlist::Playlist,
        track::{Track, TrackMetadata},
    },
    storage::error::CatalogError,
};

/// Owns every track and playlist of the library.
///
/// Records are kept in insertion order; the indexes give O(1) lookup by id.
/// All mutation goes through `&mut self`, and each operation validates before
/// it touches any collection, so a failed call leaves the catalog unchanged.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
    track_index: HashMap<TrackId, usize>,
    playlists: Vec<Playlist>,
    playlist_index: HashMap<PlaylistId, usize>,
    id_len: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_id_len(DEFAULT_ID_LEN)
    }

    /// empty catalog whose generated ids have `id_len` hex digits
    pub fn with_id_len(id_len: usize) -> Self {
        Self {
            tracks: Vec::new(),
            track_index: HashMap::new(),
            playlists: Vec::new(),
            playlist_index: HashMap::new(),
            id_len,
        }
    }

    /// Inserts already identified records in order, rejecting duplicate ids
    pub fn with_records(
        mut self,
        tracks: impl IntoIterator<Item = Track>,
        playlists: impl IntoIterator<Item = Playlist>,
    ) -> Result<Self, CatalogError> {
        for track in tracks {
            self.insert_track(track)?;
        }
        for playlist in playlists {
            self.insert_playlist(playlist)?;
        }
        Ok(self)
    }

    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.track_index.get(id).map(|&i| &self.tracks[i])
    }

    pub fn get_playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlist_index.get(id).map(|&i| &self.playlists[i])
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn insert_track(&mut self, track: Track) -> Result<(), CatalogError> {
        if track.id.as_str().is_empty() {
            return Err(CatalogError::InvalidId {
                kind: "track",
                id: track.id.0,
            });
        }
        if self.track_index.contains_key(&track.id) {
            return Err(CatalogError::DuplicateTrack(track.id));
        }

        self.track_index.insert(track.id.clone(), self.tracks.len());
        self.tracks.push(track);
        Ok(())
    }

    pub fn insert_playlist(&mut self, playlist: Playlist) -> Result<(), CatalogError> {
        if playlist.id.as_str().is_empty() {
            return Err(CatalogError::InvalidId {
                kind: "playlist",
                id: playlist.id.0,
            });
        }
        if self.playlist_index.contains_key(&playlist.id) {
            return Err(CatalogError::DuplicatePlaylist(playlist.id));
        }

        self.playlist_index
            .insert(playlist.id.clone(), self.playlists.len());
        self.playlists.push(playlist);
        Ok(())
    }

    /// creates a track with a freshly generated id and returns that id
    pub fn add_track(&mut self, metadata: TrackMetadata) -> TrackId {
        let seed = format!(
            "track\0{}\0{}\0{}",
            metadata.name.as_deref().unwrap_or_default(),
            metadata.artist.as_deref().unwrap_or_default(),
            metadata.album.as_deref().unwrap_or_default(),
        );
        let id = TrackId(generate_id(&seed, self.id_len, |id| {
            self.track_index.contains_key(id)
        }));

        log::debug!("adding track {id}");
        self.track_index.insert(id.clone(), self.tracks.len());
        self.tracks.push(Track::new(id.clone(), metadata));
        id
    }

    /// creates an empty playlist with a freshly generated id and returns that id
    pub fn add_playlist(&mut self, name: &str) -> PlaylistId {
        let seed = format!("playlist\0{name}");
        let id = PlaylistId(generate_id(&seed, self.id_len, |id| {
            self.playlist_index.contains_key(id)
        }));

        log::debug!("adding playlist {id}");
        self.playlist_index.insert(id.clone(), self.playlists.len());
        self.playlists.push(Playlist::new(id.clone(), name));
        id
    }

    /// Appends an existing track to an existing playlist.
    ///
    /// Both ids must resolve, so this never introduces a dangling reference.
    /// The same track may be appended more than once.
    pub fn add_track_to_playlist(
        &mut self,
        track_id: &str,
        playlist_id: &str,
    ) -> Result<(), CatalogError> {
        let Some(&playlist) = self.playlist_index.get(playlist_id) else {
            return Err(CatalogError::PlaylistNotFound(playlist_id.into()));
        };
        let Some(track) = self.get_track(track_id) else {
            return Err(CatalogError::TrackNotFound(track_id.into()));
        };

        let track = track.id.clone();
        log::debug!("appending track {track} to playlist {playlist_id}");
        self.playlists[playlist].tracks.push(track);
        Ok(())
    }
}
