//! # Spotify Integration Module
//!
//! Thin client for the two Spotify endpoints the top-artists stage needs:
//! the OAuth token endpoint (refresh-token grant) and the current user's
//! top artists.
//!
//! ## Overview
//!
//! ```text
//! cli::top_artists
//!          ↓
//! spotify::auth     POST {token_url}            (Basic client credentials)
//! spotify::artists  GET  {api_url}/me/top/artists (Bearer access token)
//!          ↓
//! reqwest
//! ```
//!
//! ## Error Handling
//!
//! Both calls report failures as [`SpotifyError`]: either the request never
//! produced a response ([`SpotifyError::Request`]) or Spotify answered with a
//! non-success status, kept together with the response body
//! ([`SpotifyError::Status`]).
//!
//! - A failed token exchange is fatal for the stage.
//! - A failed page ends pagination; the artists collected so far are kept.
//!
//! ## Security
//!
//! The client secret and refresh token only ever leave the process in the
//! token request. Neither they nor the resulting access token are logged.

use std::fmt;

use reqwest::{Response, StatusCode};

pub mod artists;
pub mod auth;

#[derive(Debug)]
pub enum SpotifyError {
    Request(reqwest::Error),
    Status { status: StatusCode, body: String },
}

impl From<reqwest::Error> for SpotifyError {
    fn from(err: reqwest::Error) -> Self {
        SpotifyError::Request(err)
    }
}

impl fmt::Display for SpotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpotifyError::Request(e) => write!(f, "{}", e),
            SpotifyError::Status { status, body } => write!(f, "{}, {}", status.as_u16(), body),
        }
    }
}

impl std::error::Error for SpotifyError {}

/// Passes successful responses through and turns anything else into
/// [`SpotifyError::Status`] with the body attached.
async fn check_status(response: Response) -> Result<Response, SpotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(SpotifyError::Status { status, body })
}
