use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::track::TrackMetadata;
use crate::library::query::Query;
use crate::library::sink::{LineSink, Stdout};
use crate::storage::catalog::Catalog;
use crate::storage::seed;

#[derive(Parser)]
#[command(name = "mixdeck")]
#[command(version = "0.1")]
#[command(about = "Browse a small music library of tracks and playlists")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog file (.toml or .json), overrides the config
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Without a command, prints all playlists, all tracks and playlist p01
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List playlists with their track counts
    Playlists,
    /// List all tracks
    Tracks,
    /// Show one playlist and its tracks
    Show {
        /// Playlist id, e.g. p01
        id: String,
    },
    /// Find tracks whose name, artist or album contains the query
    Search { query: String },
    /// Add a track, then list all tracks
    AddTrack {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        artist: Option<String>,
        #[arg(long)]
        album: Option<String>,
    },
    /// Add an empty playlist, then list all playlists
    AddPlaylist { name: String },
    /// Append an existing track to an existing playlist, then show it
    AddToPlaylist { track_id: String, playlist_id: String },
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut catalog = open_catalog(&cli, &cfg)?;
    let mut out = Stdout;

    match cli.command {
        None => demo(&catalog, &mut out),

        Some(Commands::Playlists) => {
            Query::new(&catalog).list_playlists(&mut out);
        }

        Some(Commands::Tracks) => {
            Query::new(&catalog).list_tracks(&mut out);
        }

        Some(Commands::Show { id }) => show(&Query::new(&catalog), &id, &mut out),

        Some(Commands::Search { query }) => {
            if let Ok(found) = Query::new(&catalog).search_tracks(&query, &mut out) {
                log::info!("found {} tracks matching '{query}'", found.len());
            }
        }

        Some(Commands::AddTrack {
            name,
            artist,
            album,
        }) => {
            let id = catalog.add_track(TrackMetadata {
                name,
                artist,
                album,
            });
            log::info!("added track {id}");
            Query::new(&catalog).list_tracks(&mut out);
        }

        Some(Commands::AddPlaylist { name }) => {
            let id = catalog.add_playlist(&name);
            log::info!("added playlist {id}");
            Query::new(&catalog).list_playlists(&mut out);
        }

        Some(Commands::AddToPlaylist {
            track_id,
            playlist_id,
        }) => add_to_playlist(&mut catalog, &track_id, &playlist_id, &mut out),
    }

    Ok(())
}

fn open_catalog(cli: &Cli, cfg: &Config) -> anyhow::Result<Catalog> {
    let id_len = cfg.ids.length;
    let catalog = match cli.catalog.as_ref().or(cfg.catalog.path.as_ref()) {
        Some(path) => {
            log::debug!("loading catalog from {}", path.to_string_lossy());
            seed::load(path, id_len)?
        }
        None => seed::demo(id_len)?,
    };
    Ok(catalog)
}

/// Shows a playlist and logs what was left out
fn show(query: &Query, id: &str, out: &mut impl LineSink) {
    if let Ok(report) = query.show_playlist(id, out) {
        log::info!(
            "shown {} tracks, skipped {}",
            report.shown,
            report.skipped.len()
        );
        for skipped in &report.skipped {
            log::debug!("playlist {id} references unknown track {skipped}");
        }
    }
}

fn add_to_playlist(
    catalog: &mut Catalog,
    track_id: &str,
    playlist_id: &str,
    out: &mut impl LineSink,
) {
    match catalog.add_track_to_playlist(track_id, playlist_id) {
        Ok(()) => {
            log::info!("added track {track_id} to playlist {playlist_id}");
            show(&Query::new(catalog), playlist_id, out);
        }
        Err(e) => out.emit(format!("Cannot add track: {e}")),
    }
}

/// The startup sequence
fn demo(catalog: &Catalog, out: &mut impl LineSink) {
    let query = Query::new(catalog);

    out.emit("The playlists are:".to_string());
    query.list_playlists(out);

    out.emit("The tracks are:".to_string());
    query.list_tracks(out);

    out.emit("The playlist tracks are:".to_string());
    show(&query, "p01", out);
}
