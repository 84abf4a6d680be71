//! Configuration management for the playlist porter.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the platform-specific local data directory. The bearer
//! token is deliberately the only required value; everything else has a
//! sensible default.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Looks for `spotportcli/.env` under the platform data directory (e.g.
/// `~/.local/share/spotportcli/.env` on Linux), creating the directory if it
/// does not exist yet. A missing `.env` file is not an error; real environment
/// variables always win.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotportcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify bearer token from the `TOKEN` environment variable.
///
/// Every Web API request carries this token. `None` when the variable is
/// unset or empty; the caller decides how fatal that is.
pub fn token() -> Option<String> {
    env::var("TOKEN").ok().filter(|t| !t.is_empty())
}

/// Whether verbose diagnostic output is enabled.
///
/// Any non-empty value of the `DEBUG` environment variable switches it on.
pub fn is_debug() -> bool {
    env::var("DEBUG").map(|v| !v.is_empty()).unwrap_or(false)
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to the public API endpoint when the
/// variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}
