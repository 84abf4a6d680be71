//! AWA playlist page scraping.
//!
//! Fetches a playlist page and pulls out its name, description and track
//! list using fixed CSS selectors. The extraction itself is a pure function
//! over the page body, so it can be exercised against fixtures without any
//! network access.

use reqwest::StatusCode;
use scraper::{Html, Selector};

use crate::{
    debug,
    error::ScrapeError,
    types::{SourcePlaylist, Track},
};

/// Number of track/artist pairs an AWA playlist page carries.
pub const TRACK_COUNT: usize = 8;

// Class names are generated by AWA's bundler; they change when the page is
// redeployed and then need updating here.
const NAME_SELECTOR: &str = "._38UsOh4Z6h0g6W85obDl_M.-fw-b";
const DESCRIPTION_SELECTOR: &str =
    ".cSux9HGnsrA6Wg6YcZJpP._2VQVMPZjwSZ7gutPRRfXQh._1nQ5k5yMiVg8rurXPOKTTJ";
const TRACK_CELL_SELECTOR: &str = ".c1tzH5-SsFpW2sQBsrLLg._2Fb6XA6X_L7NVOLEUR3qN4";

/// Suffix the page appends to truncated descriptions ("read more").
const READ_MORE_SUFFIX: &str = "…もっと見る";

/// Fetches an AWA playlist page and extracts its contents.
///
/// Requires a 200 response; any other status is an error. No retries.
pub async fn scrape(url: &str) -> Result<SourcePlaylist, ScrapeError> {
    debug!("scraping {}", url);
    let response = reqwest::get(url)
        .await
        .map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    })?;

    extract_playlist(&body)
}

/// Extracts playlist name, description and exactly [`TRACK_COUNT`]
/// track/artist pairs from a playlist page body.
///
/// Track and artist names live in alternating cells matched by one selector:
/// even indices are track names, odd indices are artists. Name and
/// description failures abort immediately; empty cells are collected across
/// the whole page and reported as one combined error, as is a cell count
/// that does not yield exactly [`TRACK_COUNT`] pairs.
pub fn extract_playlist(html: &str) -> Result<SourcePlaylist, ScrapeError> {
    let document = Html::parse_document(html);
    let name_selector = Selector::parse(NAME_SELECTOR).unwrap();
    let description_selector = Selector::parse(DESCRIPTION_SELECTOR).unwrap();
    let cell_selector = Selector::parse(TRACK_CELL_SELECTOR).unwrap();

    let name = document
        .select(&name_selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default();
    if name.is_empty() {
        return Err(ScrapeError::extraction("could not find playlist name"));
    }
    debug!("name: {}", name);

    let raw_description = document
        .select(&description_selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default();
    let description = raw_description
        .strip_suffix(READ_MORE_SUFFIX)
        .unwrap_or(&raw_description)
        .to_string();
    if description.is_empty() {
        return Err(ScrapeError::extraction("could not find description"));
    }
    debug!("description: {}", description);

    let mut names: Vec<String> = Vec::with_capacity(TRACK_COUNT);
    let mut artists: Vec<String> = Vec::with_capacity(TRACK_COUNT);
    let mut problems: Vec<String> = Vec::new();

    for (i, cell) in document.select(&cell_selector).enumerate() {
        let text = cell.text().collect::<String>();
        if i % 2 == 0 {
            if text.is_empty() {
                problems.push(format!("could not find track name, i={}", i));
            }
            debug!("{:2}: name={}", i, text);
            names.push(text);
        } else {
            if text.is_empty() {
                problems.push(format!("could not find artist, i={}", i));
            }
            debug!("{:2}: artist={}", i, text);
            artists.push(text);
        }
    }

    if names.len() != TRACK_COUNT || artists.len() != TRACK_COUNT {
        problems.push(format!(
            "expected {} track/artist pairs, found {} names and {} artists",
            TRACK_COUNT,
            names.len(),
            artists.len()
        ));
    }

    if !problems.is_empty() {
        return Err(ScrapeError::Extraction { problems });
    }

    let tracks = names
        .into_iter()
        .zip(artists)
        .map(|(name, artist)| Track { name, artist })
        .collect();

    Ok(SourcePlaylist {
        name,
        description,
        tracks,
    })
}
