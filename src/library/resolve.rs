use crate::{
    domain::{id::TrackId, playlist::Playlist, track::Track},
    storage::catalog::Catalog,
};

/// One playlist entry after lookup in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    Found(&'a Track),
    /// dangling reference, carries the id the playlist listed
    Missing(&'a TrackId),
}

impl<'a> Resolved<'a> {
    pub fn id(&self) -> &'a TrackId {
        match *self {
            Resolved::Found(track) => &track.id,
            Resolved::Missing(id) => id,
        }
    }

    pub fn track(&self) -> Option<&'a Track> {
        match *self {
            Resolved::Found(track) => Some(track),
            Resolved::Missing(_) => None,
        }
    }
}

/// Looks up every track id of the playlist, keeping order and duplicates.
///
/// Missing ids are returned as [`Resolved::Missing`], never dropped here.
pub fn resolve<'a>(playlist: &'a Playlist, catalog: &'a Catalog) -> Vec<Resolved<'a>> {
    playlist
        .tracks
        .iter()
        .map(|id| match catalog.get_track(id.as_str()) {
            Some(track) => Resolved::Found(track),
            None => Resolved::Missing(id),
        })
        .collect()
}
