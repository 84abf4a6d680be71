use crate::{debug, error, scrape, spotify, spotify::SpotifyClient, success, utils};

pub async fn add(client: &SpotifyClient, source_url: &str, destination_url: &str) {
    let pb = super::spinner("Scraping source playlist...");
    let playlist = match scrape::scrape(source_url).await {
        Ok(playlist) => {
            pb.finish_and_clear();
            playlist
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Could not scrape {}: {}", source_url, e);
        }
    };
    success!(
        "Scraped \"{}\" with {} tracks",
        playlist.name,
        playlist.tracks.len()
    );

    let uris = match super::resolve_tracks(client, &playlist.tracks).await {
        Ok(uris) => uris,
        Err(e) => error!("Could not resolve tracks: {}", e),
    };

    let playlist_id = utils::parse_playlist_id(destination_url);
    debug!("destination playlist id: {}", playlist_id);

    let count = uris.len();
    let pb = super::spinner("Adding tracks...");
    match spotify::playlist::add_tracks(client, playlist_id, uris).await {
        Ok(()) => pb.finish_and_clear(),
        Err(e) => {
            pb.finish_and_clear();
            error!("Could not add tracks: {}", e);
        }
    }
    success!("Added {} tracks to {}", count, destination_url);
}
