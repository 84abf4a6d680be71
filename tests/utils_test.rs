use spotportcli::utils::*;

#[test]
fn test_normalize_artist_slash_and_feat() {
    // Substitutions run in order: "/" -> " " first, then "feat." removed.
    // The double space is expected here; the query builder collapses it later.
    assert_eq!(normalize_artist("A/B feat. C"), "A B  C");
}

#[test]
fn test_normalize_artist_slash_only() {
    assert_eq!(
        normalize_artist("Cymbals/古市 コータロー/内田 晴元"),
        "Cymbals 古市 コータロー 内田 晴元"
    );
}

#[test]
fn test_normalize_artist_feat_only() {
    assert_eq!(
        normalize_artist("Tomggg feat. Raychel Jay"),
        "Tomggg  Raychel Jay"
    );
}

#[test]
fn test_normalize_artist_leaves_other_text_alone() {
    assert_eq!(normalize_artist("Plain Artist"), "Plain Artist");
    assert_eq!(normalize_artist(""), "");
}

#[test]
fn test_build_search_query_collapses_whitespace() {
    assert_eq!(build_search_query("X", "A/B feat. C"), "X A B C");
}

#[test]
fn test_build_search_query_plain() {
    assert_eq!(build_search_query("Song Name", "Artist"), "Song Name Artist");
}

#[test]
fn test_parse_playlist_id_takes_final_path_segment() {
    assert_eq!(
        parse_playlist_id("https://open.spotify.com/playlist/2dpeGxTWfOVysBwuO5bvta"),
        "2dpeGxTWfOVysBwuO5bvta"
    );
}

#[test]
fn test_parse_playlist_id_without_slashes() {
    // No path separators: the whole string is the id
    assert_eq!(
        parse_playlist_id("2dpeGxTWfOVysBwuO5bvta"),
        "2dpeGxTWfOVysBwuO5bvta"
    );
}
