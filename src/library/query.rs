use crate::{
    domain::id::TrackId,
    library::{
        error::QueryError,
        format,
        resolve::resolve,
        sink::LineSink,
    },
    storage::catalog::Catalog,
};

/// Read-only operations over a catalog that render their result as lines
pub struct Query<'c> {
    catalog: &'c Catalog,
}

/// What `show_playlist` printed
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShowReport {
    /// track lines emitted
    pub shown: usize,
    /// dangling ids that were left out, in playlist order
    pub skipped: Vec<TrackId>,
}

impl<'c> Query<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Emits one summary line per playlist and returns how many were listed
    pub fn list_playlists(&self, out: &mut impl LineSink) -> usize {
        let playlists = self.catalog.playlists();
        if playlists.is_empty() {
            out.emit(format::NO_PLAYLISTS.to_string());
            return 0;
        }

        for playlist in playlists {
            out.emit(format::playlist_summary(playlist));
        }
        playlists.len()
    }

    /// Emits one line per track and returns how many were listed
    pub fn list_tracks(&self, out: &mut impl LineSink) -> usize {
        let tracks = self.catalog.tracks();
        if tracks.is_empty() {
            out.emit(format::NO_TRACKS.to_string());
            return 0;
        }

        for track in tracks {
            out.emit(format::track_line(track));
        }
        tracks.len()
    }

    /// Emits the playlist summary followed by its resolvable tracks.
    ///
    /// Dangling references are skipped with a warning and listed in the report.
    /// On error the notice is emitted before the error is returned.
    pub fn show_playlist(
        &self,
        playlist_id: &str,
        out: &mut impl LineSink,
    ) -> Result<ShowReport, QueryError> {
        if playlist_id.is_empty() {
            return Err(notice(QueryError::InvalidPlaylistId, out));
        }

        let Some(playlist) = self.catalog.get_playlist(playlist_id) else {
            return Err(notice(
                QueryError::PlaylistNotFound(playlist_id.to_string()),
                out,
            ));
        };

        out.emit(format::playlist_summary(playlist));

        let mut report = ShowReport::default();
        if playlist.declared_len() == 0 {
            out.emit(format::empty_notice().to_string());
            return Ok(report);
        }

        for entry in resolve(playlist, self.catalog) {
            if let Some(track) = entry.track() {
                out.emit(format::track_line(track));
                report.shown += 1;
            } else {
                let id = entry.id();
                log::warn!("Track {id} not found in the library and will be skipped.");
                report.skipped.push(id.clone());
            }
        }

        Ok(report)
    }

    /// Emits every track whose name, artist or album contains `query`,
    /// ignoring case, and returns their ids in catalog order
    pub fn search_tracks(
        &self,
        query: &str,
        out: &mut impl LineSink,
    ) -> Result<Vec<TrackId>, QueryError> {
        if query.trim().is_empty() {
            return Err(notice(QueryError::EmptySearchQuery, out));
        }

        let needle = query.to_lowercase();
        let matches = self
            .catalog
            .tracks()
            .iter()
            .filter(|track| {
                [track.name(), track.artist(), track.album()]
                    .into_iter()
                    .flatten()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect::<Vec<_>>();

        if matches.is_empty() {
            out.emit(format::no_matches_notice(query));
        }
        for track in &matches {
            out.emit(format::track_line(track));
        }

        Ok(matches.into_iter().map(|t| t.id.clone()).collect())
    }
}

fn notice(err: QueryError, out: &mut impl LineSink) -> QueryError {
    log::debug!("query rejected: {err:?}");
    out.emit(err.to_string());
    err
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            id::{DEFAULT_ID_LEN, TrackId},
            playlist::Playlist,
            track::{Track, TrackMetadata},
        },
        library::{
            error::QueryError,
            query::{Query, ShowReport},
        },
        storage::{catalog::Catalog, seed},
    };

    fn demo_catalog() -> anyhow::Result<Catalog> {
        Ok(seed::demo(DEFAULT_ID_LEN)?)
    }

    #[test]
    fn test_list_playlists() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let mut out: Vec<String> = Vec::new();

        let listed = Query::new(&catalog).list_playlists(&mut out);

        assert_eq!(listed, 4);
        assert_eq!(
            out,
            vec![
                "p01: Coding Music - 2 tracks",
                "p02: Other Playlist - 1 track",
                "p03: Empty Playlist - 0 tracks",
                "p04: Missing Tracks - 3 tracks",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_list_playlists_empty_catalog() {
        let catalog = Catalog::new();
        let mut out: Vec<String> = Vec::new();

        let listed = Query::new(&catalog).list_playlists(&mut out);

        assert_eq!(listed, 0);
        assert_eq!(out, vec!["No playlists available."]);
    }

    #[test]
    fn test_list_tracks() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let mut out: Vec<String> = Vec::new();

        Query::new(&catalog).list_tracks(&mut out);

        assert_eq!(
            out,
            vec![
                "t01: Code Monkey by Jonathan Coulton (Thing a Week Three)",
                "t02: Model View Controller by James Dempsey (WWDC 2003)",
                "t03: Four Thirty-Three by John Cage (Woodstock 1952)",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_list_tracks_with_missing_fields() -> anyhow::Result<()> {
        let catalog = Catalog::new().with_records(
            vec![
                Track::new("t01", TrackMetadata::default()),
                Track::new(
                    "t02",
                    TrackMetadata {
                        name: Some("Untitled".to_string()),
                        artist: Some(String::new()),
                        album: None,
                    },
                ),
            ],
            vec![],
        )?;
        let mut out: Vec<String> = Vec::new();

        Query::new(&catalog).list_tracks(&mut out);

        assert_eq!(
            out,
            vec![
                "t01: Unknown Track by Unknown Artist (Unknown Album)",
                "t02: Untitled by Unknown Artist (Unknown Album)",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_list_tracks_empty_catalog() {
        let catalog = Catalog::new();
        let mut out: Vec<String> = Vec::new();

        assert_eq!(Query::new(&catalog).list_tracks(&mut out), 0);
        assert_eq!(out, vec!["No tracks available."]);
    }

    #[test]
    fn test_show_single_track_playlist() -> anyhow::Result<()> {
        let catalog = Catalog::new().with_records(
            vec![Track::new(
                "t01",
                TrackMetadata::new("Code Monkey", "Jonathan Coulton", "Thing a Week Three"),
            )],
            vec![Playlist::new("p01", "Favourites").with_tracks(["t01"])],
        )?;
        let mut out: Vec<String> = Vec::new();

        let report = Query::new(&catalog).show_playlist("p01", &mut out)?;

        assert_eq!(report, ShowReport { shown: 1, skipped: vec![] });
        assert_eq!(
            out,
            vec![
                "p01: Favourites - 1 track",
                "t01: Code Monkey by Jonathan Coulton (Thing a Week Three)",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_show_empty_playlist() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let mut out: Vec<String> = Vec::new();

        let report = Query::new(&catalog).show_playlist("p03", &mut out)?;

        assert_eq!(report.shown, 0);
        assert_eq!(
            out,
            vec![
                "p03: Empty Playlist - 0 tracks",
                "This playlist is currently empty.",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_show_playlist_skips_dangling_references() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let mut out: Vec<String> = Vec::new();

        let report = Query::new(&catalog).show_playlist("p04", &mut out)?;

        assert_eq!(
            report,
            ShowReport {
                shown: 2,
                skipped: vec![TrackId::from("txx")],
            }
        );
        assert_eq!(
            out,
            vec![
                "p04: Missing Tracks - 3 tracks",
                "t01: Code Monkey by Jonathan Coulton (Thing a Week Three)",
                "t02: Model View Controller by James Dempsey (WWDC 2003)",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_show_playlist_with_only_dangling_references() -> anyhow::Result<()> {
        let catalog = Catalog::new().with_records(
            vec![],
            vec![Playlist::new("p01", "Ghosts").with_tracks(["tx1", "tx2"])],
        )?;
        let mut out: Vec<String> = Vec::new();

        let report = Query::new(&catalog).show_playlist("p01", &mut out)?;

        assert_eq!(report.shown, 0);
        assert_eq!(report.skipped.len(), 2);
        // declared count is not empty, so no empty notice either
        assert_eq!(out, vec!["p01: Ghosts - 2 tracks"]);

        Ok(())
    }

    #[test]
    fn test_show_unknown_playlist() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let mut out: Vec<String> = Vec::new();

        let err = Query::new(&catalog)
            .show_playlist("p99", &mut out)
            .unwrap_err();

        assert_eq!(err, QueryError::PlaylistNotFound("p99".to_string()));
        assert_eq!(out, vec!["Playlist with ID 'p99' not found."]);

        Ok(())
    }

    #[test]
    fn test_show_invalid_playlist_id() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;

        let mut out: Vec<String> = Vec::new();
        let err = Query::new(&catalog).show_playlist("", &mut out).unwrap_err();

        assert_eq!(err, QueryError::InvalidPlaylistId);
        assert_eq!(
            out,
            vec!["Invalid playlist ID. Please provide a valid string."]
        );

        // blank but non-empty ids are looked up like any other
        let mut out: Vec<String> = Vec::new();
        let err = Query::new(&catalog).show_playlist("   ", &mut out).unwrap_err();

        assert_eq!(err, QueryError::PlaylistNotFound("   ".to_string()));
        assert_eq!(out, vec!["Playlist with ID '   ' not found."]);

        Ok(())
    }

    #[test]
    fn test_show_playlist_with_blank_id() -> anyhow::Result<()> {
        let catalog = Catalog::new().with_records(
            vec![Track::new(
                "t01",
                TrackMetadata::new("Code Monkey", "Jonathan Coulton", "Thing a Week Three"),
            )],
            vec![Playlist::new(" ", "Spaces").with_tracks(["t01"])],
        )?;
        assert!(catalog.get_playlist(" ").is_some());

        let mut out: Vec<String> = Vec::new();
        let report = Query::new(&catalog).show_playlist(" ", &mut out)?;

        assert_eq!(report.shown, 1);
        assert_eq!(
            out,
            vec![
                " : Spaces - 1 track",
                "t01: Code Monkey by Jonathan Coulton (Thing a Week Three)",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_queries_are_idempotent() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let query = Query::new(&catalog);

        let run = || {
            let mut out: Vec<String> = Vec::new();
            query.list_playlists(&mut out);
            query.list_tracks(&mut out);
            for id in ["p01", "p03", "p04", "p99", ""] {
                let _ = query.show_playlist(id, &mut out);
            }
            out
        };

        assert_eq!(run(), run());

        Ok(())
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let query = Query::new(&catalog);

        let mut out: Vec<String> = Vec::new();
        let by_name = query.search_tracks("MONKEY", &mut out)?;
        assert_eq!(by_name, vec![TrackId::from("t01")]);
        assert_eq!(
            out,
            vec!["t01: Code Monkey by Jonathan Coulton (Thing a Week Three)"]
        );

        let mut out: Vec<String> = Vec::new();
        let by_artist_or_album = query.search_tracks("jo", &mut out)?;
        assert_eq!(
            by_artist_or_album,
            vec![TrackId::from("t01"), TrackId::from("t03")]
        );

        let mut out: Vec<String> = Vec::new();
        let by_album = query.search_tracks("wwdc", &mut out)?;
        assert_eq!(by_album, vec![TrackId::from("t02")]);

        Ok(())
    }

    #[test]
    fn test_search_ignores_fallback_text() -> anyhow::Result<()> {
        let catalog = Catalog::new().with_records(vec![Track::new("t01", TrackMetadata::default())], vec![])?;
        let mut out: Vec<String> = Vec::new();

        let found = Query::new(&catalog).search_tracks("unknown", &mut out)?;

        assert!(found.is_empty());
        assert_eq!(out, vec!["No tracks match 'unknown'."]);

        Ok(())
    }

    #[test]
    fn test_search_rejects_blank_query() -> anyhow::Result<()> {
        let catalog = demo_catalog()?;
        let mut out: Vec<String> = Vec::new();

        let err = Query::new(&catalog)
            .search_tracks(" ", &mut out)
            .unwrap_err();

        assert_eq!(err, QueryError::EmptySearchQuery);
        assert_eq!(out.len(), 1);

        Ok(())
    }

    #[test]
    fn test_added_records_show_up_in_queries() -> anyhow::Result<()> {
        let mut catalog = demo_catalog()?;

        let track = catalog.add_track(TrackMetadata::new("Still Alive", "GLaDOS", "Portal"));
        let playlist = catalog.add_playlist("Games");
        catalog.add_track_to_playlist(track.as_str(), playlist.as_str())?;

        let mut out: Vec<String> = Vec::new();
        let report = Query::new(&catalog).show_playlist(playlist.as_str(), &mut out)?;

        assert_eq!(report.shown, 1);
        assert_eq!(
            out,
            vec![
                format!("{playlist}: Games - 1 track"),
                format!("{track}: Still Alive by GLaDOS (Portal)"),
            ]
        );

        Ok(())
    }
}
