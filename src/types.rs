use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A playlist as extracted from an AWA playlist page. Immutable once the
/// scrape succeeds; nothing here survives the process.
#[derive(Debug, Clone)]
pub struct SourcePlaylist {
    pub name: String,
    pub description: String,
    pub tracks: Vec<Track>,
}

/// One track/artist pair in source-page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct ResolutionTableRow {
    pub track: String,
    pub artist: String,
    pub result: String,
}

// Wire types below mirror the Spotify Web API JSON shapes field for field.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub external_urls: ExternalUrls,
}

/// Link and identifier of a freshly created playlist.
#[derive(Debug, Clone)]
pub struct CreatedPlaylist {
    pub id: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: SearchTracksContainer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTracksContainer {
    pub items: Vec<FoundTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundTrack {
    pub uri: String,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksResponse {
    pub snapshot_id: String,
}
