use crate::{error, scrape, spotify, spotify::SpotifyClient, success};

pub async fn create(
    client: &SpotifyClient,
    source_url: &str,
    name: Option<String>,
    desc: Option<String>,
) {
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

    let name = name.unwrap_or_else(|| playlist.name.clone());
    let desc = desc.unwrap_or_else(|| playlist.description.clone());

    let pb = super::spinner("Creating playlist...");
    let created = match spotify::playlist::create(client, &name, &desc).await {
        Ok(created) => {
            pb.finish_and_clear();
            created
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Could not create playlist: {}", e);
        }
    };
    success!("Created playlist \"{}\"", name);

    let count = uris.len();
    let pb = super::spinner("Adding tracks...");
    match spotify::playlist::add_tracks(client, &created.id, uris).await {
        Ok(()) => pb.finish_and_clear(),
        Err(e) => {
            pb.finish_and_clear();
            error!("Could not add tracks: {}", e);
        }
    }
    success!("Added {} tracks", count);
    success!("playlist url: {}", created.link);
}
