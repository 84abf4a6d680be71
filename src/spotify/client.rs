use reqwest::{Client, Response, header};
use serde::{Serialize, de::DeserializeOwned};

use crate::{debug, error::ApiError};

/// Authenticated Spotify Web API client.
///
/// Wraps one `reqwest::Client` and the bearer token; constructed once at
/// startup and passed by reference into every call. Responses are checked
/// for a success status first and only then decoded into their typed shape,
/// so a non-2xx answer surfaces with its raw body intact and a shape
/// mismatch on a 2xx answer is reported as a decode error.
///
/// No token refresh, no rate-limit handling, no retries.
pub struct SpotifyClient {
    http: Client,
    token: String,
}

impl SpotifyClient {
    pub fn new(token: String) -> Self {
        SpotifyClient {
            http: Client::new(),
            token,
        }
    }

    /// Issues a GET request and decodes the response body into `T`.
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: url.to_string(),
                source,
            })?;

        Self::decode(url, None, response).await
    }

    /// Issues a POST request with a JSON body and decodes the response body
    /// into `T`. The serialized request body travels along in any status
    /// error for diagnostics.
    pub async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_string(body).map_err(|source| ApiError::Decode {
            endpoint: url.to_string(),
            source,
        })?;
        debug!("POST {} body: {}", url, payload);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload.clone())
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: url.to_string(),
                source,
            })?;

        Self::decode(url, Some(payload), response).await
    }

    async fn decode<T: DeserializeOwned>(
        endpoint: &str,
        request_body: Option<String>,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;
        debug!("{} -> {} {}", endpoint, status, body);

        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
                request_body,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
