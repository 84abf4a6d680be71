use url::form_urlencoded;

use crate::{
    config,
    error::ApiError,
    spotify::SpotifyClient,
    types::{FoundTrack, SearchResponse, Track},
    utils,
};

/// Resolves one track/artist pair against the Spotify catalog.
///
/// Searches with a normalized query limited to a single result. `Ok(None)`
/// means the track could not be resolved unambiguously and should be
/// skipped; only client and transport failures are errors.
pub async fn search_track(
    client: &SpotifyClient,
    track: &Track,
) -> Result<Option<FoundTrack>, ApiError> {
    let query = utils::build_search_query(&track.name, &track.artist);
    let params: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &query)
        .append_pair("type", "track")
        .append_pair("limit", "1")
        .finish();
    let endpoint = format!("{}/search?{}", config::spotify_apiurl(), params);

    let response: SearchResponse = client.get(&endpoint).await?;
    Ok(single_match(response.tracks.items))
}

/// A track counts as resolved only when the result set holds exactly one
/// candidate; zero or several candidates leave it unmatched.
pub fn single_match(mut items: Vec<FoundTrack>) -> Option<FoundTrack> {
    if items.len() != 1 {
        return None;
    }
    Some(items.remove(0))
}
