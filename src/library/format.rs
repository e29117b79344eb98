//! Text rendering of catalog records

use crate::domain::{playlist::Playlist, track::Track};

pub const UNKNOWN_TRACK: &str = "Unknown Track";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

pub const EMPTY_PLAYLIST: &str = "This playlist is currently empty.";
pub const NO_PLAYLISTS: &str = "No playlists available.";
pub const NO_TRACKS: &str = "No tracks available.";

/// `t01: Code Monkey by Jonathan Coulton (Thing a Week Three)`
pub fn track_line(track: &Track) -> String {
    format!(
        "{}: {} by {} ({})",
        track.id,
        track.name().unwrap_or(UNKNOWN_TRACK),
        track.artist().unwrap_or(UNKNOWN_ARTIST),
        track.album().unwrap_or(UNKNOWN_ALBUM),
    )
}

/// `p01: Coding Music - 2 tracks`
///
/// Counts declared references, so dangling ids are included.
pub fn playlist_summary(playlist: &Playlist) -> String {
    let count = playlist.declared_len();
    format!(
        "{}: {} - {} {}",
        playlist.id,
        playlist.name,
        count,
        plural(count, "track", "tracks")
    )
}

pub fn empty_notice() -> &'static str {
    EMPTY_PLAYLIST
}

pub fn no_matches_notice(query: &str) -> String {
    format!("No tracks match '{query}'.")
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
