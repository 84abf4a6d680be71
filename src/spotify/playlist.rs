use crate::{
    config, debug,
    error::ApiError,
    spotify::SpotifyClient,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CreatedPlaylist, UserProfileResponse,
    },
};

/// Creates a playlist under the authenticated user.
///
/// Resolves the user id via `GET /me` first; a failure there aborts before
/// any playlist-creation call is made. Newlines are stripped from the
/// description since Spotify rejects them. Returns the new playlist's public
/// link and id.
pub async fn create(
    client: &SpotifyClient,
    name: &str,
    description: &str,
) -> Result<CreatedPlaylist, ApiError> {
    let endpoint = format!("{}/me", config::spotify_apiurl());
    let profile: UserProfileResponse = client.get(&endpoint).await?;
    debug!("user: {}", profile.id);

    let request = CreatePlaylistRequest {
        name: name.to_string(),
        description: description.replace('\n', ""),
    };
    let endpoint = format!(
        "{}/users/{}/playlists",
        config::spotify_apiurl(),
        profile.id
    );
    let response: CreatePlaylistResponse = client.post(&endpoint, &request).await?;
    debug!("playlist id: {}", response.id);

    Ok(CreatedPlaylist {
        id: response.id,
        link: response.external_urls.spotify,
    })
}

/// Appends the given track URIs to a playlist in one batch call.
pub async fn add_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<(), ApiError> {
    let endpoint = format!(
        "{}/playlists/{}/tracks",
        config::spotify_apiurl(),
        playlist_id
    );
    let request = AddTracksRequest { uris };
    let response: AddTracksResponse = client.post(&endpoint, &request).await?;
    debug!("snapshot: {}", response.snapshot_id);

    Ok(())
}
