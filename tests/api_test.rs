use serde_json::json;
use spotportcli::spotify::search::single_match;
use spotportcli::types::{
    AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
    ExternalUrls, FoundTrack, SearchResponse, UserProfileResponse,
};

// Helper function to create a search result entry
fn found(uri: &str) -> FoundTrack {
    FoundTrack {
        uri: uri.to_string(),
        external_urls: ExternalUrls {
            spotify: format!("https://open.spotify.com/track/{}", uri),
        },
    }
}

#[test]
fn test_create_playlist_request_wire_shape() {
    let request = CreatePlaylistRequest {
        name: "Ported".to_string(),
        description: "From AWA".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"name": "Ported", "description": "From AWA"})
    );
}

#[test]
fn test_add_tracks_request_wire_shape() {
    let request = AddTracksRequest {
        uris: vec![
            "spotify:track:abc".to_string(),
            "spotify:track:def".to_string(),
        ],
    };

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"uris": ["spotify:track:abc", "spotify:track:def"]})
    );
}

#[test]
fn test_user_profile_response_decodes() {
    // The API sends far more fields; only the id matters here
    let body = r#"{"id": "someuser", "display_name": "Some User", "country": "JP"}"#;
    let profile: UserProfileResponse = serde_json::from_str(body).unwrap();
    assert_eq!(profile.id, "someuser");
}

#[test]
fn test_create_playlist_response_decodes() {
    let body = r#"{
        "id": "2dpeGxTWfOVysBwuO5bvta",
        "external_urls": {"spotify": "https://open.spotify.com/playlist/2dpeGxTWfOVysBwuO5bvta"},
        "name": "Ported",
        "public": true
    }"#;

    let response: CreatePlaylistResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.id, "2dpeGxTWfOVysBwuO5bvta");
    assert_eq!(
        response.external_urls.spotify,
        "https://open.spotify.com/playlist/2dpeGxTWfOVysBwuO5bvta"
    );
}

#[test]
fn test_search_response_decodes() {
    let body = r#"{
        "tracks": {
            "href": "https://api.spotify.com/v1/search?query=x&type=track&offset=0&limit=1",
            "items": [{
                "uri": "spotify:track:abc123",
                "external_urls": {"spotify": "https://open.spotify.com/track/abc123"},
                "name": "X"
            }],
            "limit": 1,
            "total": 241
        }
    }"#;

    let response: SearchResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.tracks.items.len(), 1);
    assert_eq!(response.tracks.items[0].uri, "spotify:track:abc123");
}

#[test]
fn test_add_tracks_response_decodes() {
    let body = r#"{"snapshot_id": "AAAAAzL1"}"#;
    let response: AddTracksResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.snapshot_id, "AAAAAzL1");
}

#[test]
fn test_single_match_requires_exactly_one_item() {
    // Empty result set: unmatched
    assert!(single_match(vec![]).is_none());

    // Exactly one: that one is the match
    let hit = single_match(vec![found("spotify:track:abc")]).unwrap();
    assert_eq!(hit.uri, "spotify:track:abc");

    // More than one: ambiguous, unmatched
    assert!(single_match(vec![found("spotify:track:abc"), found("spotify:track:def")]).is_none());
}
