use thiserror::Error;

/// Conditions a query reports to the user instead of producing a listing.
///
/// The `Display` text is the notice emitted to the output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid playlist ID. Please provide a valid string.")]
    InvalidPlaylistId,

    #[error("Playlist with ID '{0}' not found.")]
    PlaylistNotFound(String),

    #[error("Invalid search query. Please provide a non-empty string.")]
    EmptySearchQuery,
}
