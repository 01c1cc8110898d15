//! Configuration management for artistline.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Spotify credentials, API base URLs
//! and the default stage file paths all come from here.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory (`artistline/.env`)
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_MUSICBRAINZ_API_URL: &str = "https://musicbrainz.org/ws/2";

pub const DEFAULT_TOP_ARTISTS_CSV: &str = "top_100_artists.csv";
pub const DEFAULT_MBID_CSV: &str = "artists_mbid.csv";
pub const DEFAULT_ALBUMS_CSV: &str = "all_artists_albums.csv";
pub const DEFAULT_GANTT_CSV: &str = "gantt_chart_data_format.csv";

/// Client credentials and the long-lived refresh token used by the
/// top-artists stage.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Loads environment variables from `.env` files.
///
/// Reads `./.env` first, then `artistline/.env` inside the platform-specific
/// local data directory. Values already present in the process environment
/// are never overridden. Missing files are fine since only the top-artists
/// stage needs credentials.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| format!("{}: {}", local.display(), e))?;
    }

    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    Ok(())
}

/// Returns `<data_local_dir>/artistline`, falling back to `./artistline`.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("artistline");
    path
}

fn required(key: &str) -> Result<String, String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", key)),
    }
}

fn with_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the Spotify client credentials and refresh token.
///
/// # Errors
///
/// Fails with the name of the first missing variable among
/// `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` and `SPOTIFY_REFRESH_TOKEN`.
pub fn spotify_credentials() -> Result<Credentials, String> {
    Ok(Credentials {
        client_id: required("SPOTIFY_CLIENT_ID")?,
        client_secret: required("SPOTIFY_CLIENT_SECRET")?,
        refresh_token: required("SPOTIFY_REFRESH_TOKEN")?,
    })
}

/// Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    with_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Spotify OAuth token endpoint used for the refresh-token exchange.
pub fn spotify_apitoken_url() -> String {
    with_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_API_TOKEN_URL)
}

/// MusicBrainz web service base URL, e.g. `https://musicbrainz.org/ws/2`.
pub fn musicbrainz_apiurl() -> String {
    with_default("MUSICBRAINZ_API_URL", DEFAULT_MUSICBRAINZ_API_URL)
}

/// User agent sent to MusicBrainz, which rejects anonymous clients.
pub fn musicbrainz_user_agent() -> String {
    with_default(
        "MUSICBRAINZ_USER_AGENT",
        concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
    )
}

pub fn top_artists_csv() -> PathBuf {
    PathBuf::from(with_default(
        "ARTISTLINE_TOP_ARTISTS_CSV",
        DEFAULT_TOP_ARTISTS_CSV,
    ))
}

pub fn mbid_csv() -> PathBuf {
    PathBuf::from(with_default("ARTISTLINE_MBID_CSV", DEFAULT_MBID_CSV))
}

pub fn albums_csv() -> PathBuf {
    PathBuf::from(with_default("ARTISTLINE_ALBUMS_CSV", DEFAULT_ALBUMS_CSV))
}

pub fn gantt_csv() -> PathBuf {
    PathBuf::from(with_default("ARTISTLINE_GANTT_CSV", DEFAULT_GANTT_CSV))
}
