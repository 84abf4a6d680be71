//! # Spotify Integration Module
//!
//! This module is the integration layer between the porter and the Spotify
//! Web API. All HTTP communication with Spotify goes through it; higher
//! layers deal in typed requests and responses only.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Client (bearer auth, typed GET/POST)
//!     ├── Playlist Operations (create, append)
//!     └── Catalog Search (track resolution)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Authenticated user's profile, for the playlist owner id
//! - `POST /users/{user_id}/playlists` - Create a new playlist
//! - `GET /search?q=…&type=track&limit=1` - Resolve one track/artist pair
//! - `POST /playlists/{playlist_id}/tracks` - Batch-append resolved tracks
//!
//! Paths and JSON shapes follow the public Web API exactly; the request and
//! response structures live in [`crate::types`].
//!
//! ## Authentication
//!
//! A bearer token from the environment is attached to every request. There
//! is no OAuth flow, no token refresh and no rate-limit handling; a rejected
//! token simply surfaces as a 401 status error.

pub mod client;
pub mod playlist;
pub mod search;

pub use client::SpotifyClient;
