/// Artist strings containing "/" or the "feat." marker are known to break
/// Spotify search; replace the former with spaces and drop the latter.
pub fn normalize_artist(artist: &str) -> String {
    artist.replace('/', " ").replace("feat.", "")
}

pub fn build_search_query(name: &str, artist: &str) -> String {
    format!("{} {}", name, normalize_artist(artist))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts the playlist id from a Spotify playlist URL: the final path
/// segment, taken verbatim.
pub fn parse_playlist_id(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
