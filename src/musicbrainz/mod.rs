//! # MusicBrainz Integration Module
//!
//! Client for the MusicBrainz web service (`/ws/2`) covering the URL lookup
//! used to map Spotify artists to MBIDs and the release-group/release
//! browse endpoints used to enumerate studio albums.
//!
//! ## Throttling
//!
//! MusicBrainz allows roughly one request per second per client. Every
//! request made through [`MusicBrainzClient`] first waits on a shared
//! [`RateLimiter`]; a `503 Service Unavailable` answer is retried according
//! to a [`RetryPolicy`] (3 attempts, 2 s apart, longer if the server sends
//! `Retry-After`). When the budget runs out the last 503 response is handed
//! back to the caller, which decides what it means.
//!
//! ## Submodules
//!
//! - [`url`] - Spotify profile URL to artist MBID
//! - [`release_groups`] - Studio albums with GB/US releases

use std::{fmt, time::Duration};

use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    management::{RateLimiter, RetryPolicy, retry_after},
    utils,
};

pub mod release_groups;
pub mod url;

pub use release_groups::RELEASE_GROUP_PAGE_SIZE;
pub use url::MbidLookup;

#[derive(Debug)]
pub enum MusicBrainzError {
    Request(reqwest::Error),
    Status(StatusCode),
}

impl From<reqwest::Error> for MusicBrainzError {
    fn from(err: reqwest::Error) -> Self {
        MusicBrainzError::Request(err)
    }
}

impl fmt::Display for MusicBrainzError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MusicBrainzError::Request(e) => write!(f, "{}", e),
            MusicBrainzError::Status(status) => write!(f, "status code {}", status.as_u16()),
        }
    }
}

impl std::error::Error for MusicBrainzError {}

/// HTTP client for the MusicBrainz web service.
///
/// Owns the rate limiter, so every request made through one client is paced
/// against the others. Stages build a single client and reuse it for every
/// artist.
pub struct MusicBrainzClient {
    client: Client,
    api_url: String,
    rate_limiter: RateLimiter,
    retry: RetryPolicy,
}

impl MusicBrainzClient {
    /// Client with the default pacing of one request per second.
    ///
    /// # Arguments
    ///
    /// * `api_url` - Web service base, e.g. `https://musicbrainz.org/ws/2`; a trailing slash is dropped
    /// * `user_agent` - Sent with every request, MusicBrainz rejects anonymous clients
    ///
    /// # Returns
    ///
    /// - `Ok(MusicBrainzClient)` - Ready to use, with [`RetryPolicy::default`]
    /// - `Err(reqwest::Error)` - The underlying HTTP client could not be built
    pub fn new(api_url: &str, user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: utils::http_client(Some(user_agent))?,
            api_url: api_url.trim_end_matches('/').to_string(),
            rate_limiter: RateLimiter::new(Duration::from_secs(1)),
            retry: RetryPolicy::default(),
        })
    }

    /// Client pointed at the configured base URL and user agent.
    pub fn from_config() -> Result<Self, reqwest::Error> {
        Self::new(
            &config::musicbrainz_apiurl(),
            &config::musicbrainz_user_agent(),
        )
    }

    /// Replaces pacing and retry settings. A zero `interval` disables pacing.
    pub fn with_throttle(mut self, interval: Duration, retry: RetryPolicy) -> Self {
        self.rate_limiter = RateLimiter::new(interval);
        self.retry = retry;
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Sends `GET {api_url}/{path}` with `query`, pacing and retrying on 503.
    ///
    /// Returns whatever response ends the exchange, which is a 503 when every
    /// attempt was refused. Transport errors are returned as-is, without
    /// retry.
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, reqwest::Error> {
        let api_url = format!("{}/{}", self.api_url, path);
        let mut attempts_left = self.retry.max_attempts.max(1);

        loop {
            self.rate_limiter.until_ready().await;
            let response = self.client.get(&api_url).query(query).send().await?;
            attempts_left -= 1;

            if response.status() != StatusCode::SERVICE_UNAVAILABLE || attempts_left == 0 {
                return Ok(response);
            }

            sleep(self.retry.delay_for(retry_after(response.headers()))).await;
        }
    }
}
