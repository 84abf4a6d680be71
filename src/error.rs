//! Error types for the two failure domains of the porter: talking to the
//! Spotify Web API and scraping the AWA playlist page.
//!
//! Transport failures, non-2xx statuses and response-shape mismatches are
//! kept apart so callers can tell a flaky network from a changed API. The
//! status variant carries the endpoint, the request body (if any) and the raw
//! response body for diagnostics.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the Spotify Web API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The API answered with a non-success status.
    #[error(
        "{endpoint} returned {status}: request={request}, response={body}",
        request = .request_body.as_deref().unwrap_or("none")
    )]
    Status {
        endpoint: String,
        status: StatusCode,
        request_body: Option<String>,
        body: String,
    },

    /// A successful response did not match the expected shape.
    #[error("unexpected payload shape for {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
}

/// Errors raised while fetching and extracting the AWA playlist page.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The page could not be fetched at all.
    #[error("could not fetch {url}: {source}")]
    Fetch {
        url: String,
        source: reqwest::Error,
    },

    /// The page answered with a status other than 200.
    #[error("{url} answered with status {status}, not 200")]
    Status { url: String, status: StatusCode },

    /// One or more expected fields were missing or empty. Per-track problems
    /// are collected over the whole page and reported together.
    #[error("{}", .problems.join("; "))]
    Extraction { problems: Vec<String> },
}

impl ScrapeError {
    pub fn extraction(problem: impl Into<String>) -> Self {
        ScrapeError::Extraction {
            problems: vec![problem.into()],
        }
    }
}
