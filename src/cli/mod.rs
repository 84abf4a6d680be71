//! # CLI Module
//!
//! User-facing command implementations. Both commands run the same
//! pipeline - scrape the AWA page, resolve each track against Spotify
//! search, append the resolved tracks in one batch:
//!
//! - [`create`] - creates a fresh Spotify playlist (name and description
//!   default to the scraped values) and fills it
//! - [`add`] - fills an already-existing Spotify playlist, identified by the
//!   trailing path segment of its URL
//!
//! Resolution misses are reported per track and skipped; everything else is
//! fatal and terminates the command through the `error!` macro.

mod add;
mod create;

pub use add::add;
pub use create::create;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error::ApiError,
    info,
    spotify::{self, SpotifyClient},
    types::{ResolutionTableRow, Track},
    warning,
};

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Resolves every track sequentially and returns the catalog URIs of the
/// matches, preserving source order. Unmatched tracks are announced and
/// skipped; a summary table is printed once the pass is done.
async fn resolve_tracks(
    client: &SpotifyClient,
    tracks: &[Track],
) -> Result<Vec<String>, ApiError> {
    let mut uris = Vec::with_capacity(tracks.len());
    let mut rows = Vec::with_capacity(tracks.len());

    for track in tracks {
        match spotify::search::search_track(client, track).await? {
            Some(found) => {
                info!(
                    "{} / {} -> {}",
                    track.name, track.artist, found.external_urls.spotify
                );
                rows.push(ResolutionTableRow {
                    track: track.name.clone(),
                    artist: track.artist.clone(),
                    result: found.external_urls.spotify.clone(),
                });
                uris.push(found.uri);
            }
            None => {
                warning!("Could not find \"{} / {}\"", track.name, track.artist);
                rows.push(ResolutionTableRow {
                    track: track.name.clone(),
                    artist: track.artist.clone(),
                    result: "not found".to_string(),
                });
            }
        }
    }

    println!("{}", Table::new(rows));
    Ok(uris)
}
