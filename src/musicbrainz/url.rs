use std::fmt;

use reqwest::StatusCode;

use crate::{
    musicbrainz::MusicBrainzClient,
    types::UrlLookupResponse,
    utils::{self, NOT_FOUND, SERVICE_UNAVAILABLE},
};

/// Outcome of resolving one Spotify artist to a MusicBrainz artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MbidLookup {
    Found(String),
    NotFound,
    ServiceUnavailable,
    Failed(String),
}

impl fmt::Display for MbidLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MbidLookup::Found(mbid) => f.write_str(mbid),
            MbidLookup::NotFound => f.write_str(NOT_FOUND),
            MbidLookup::ServiceUnavailable => f.write_str(SERVICE_UNAVAILABLE),
            MbidLookup::Failed(e) => write!(f, "An error occurred: {}", e),
        }
    }
}

impl MusicBrainzClient {
    /// Resolves a Spotify artist id to the MBID of the MusicBrainz artist that
    /// links to the artist's Spotify profile.
    ///
    /// Looks the profile URL up with `url/?resource=...&inc=artist-rels` and
    /// takes the artist of the first `free streaming` relation.
    ///
    /// # Outcomes
    ///
    /// - `Found(mbid)` - a matching relation exists
    /// - `NotFound` - 404, or the URL is known but links no artist that way
    /// - `ServiceUnavailable` - every attempt was answered with 503
    /// - `Failed(error)` - any other status, a transport error or a bad body
    ///
    /// Never fails as a whole: one bad artist must not abort the batch.
    pub async fn resolve_spotify_artist(&self, spotify_id: &str) -> MbidLookup {
        let resource = utils::spotify_artist_url(spotify_id);
        let query = [
            ("resource", resource.as_str()),
            ("fmt", "json"),
            ("inc", "artist-rels"),
        ];

        let response = match self.get("url/", &query).await {
            Ok(response) => response,
            Err(e) => return MbidLookup::Failed(e.to_string()),
        };

        match response.status() {
            StatusCode::NOT_FOUND => return MbidLookup::NotFound,
            StatusCode::SERVICE_UNAVAILABLE => return MbidLookup::ServiceUnavailable,
            _ => {}
        }

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => return MbidLookup::Failed(e.to_string()),
        };

        match response.json::<UrlLookupResponse>().await {
            Ok(lookup) => utils::free_streaming_artist(&lookup)
                .map(MbidLookup::Found)
                .unwrap_or(MbidLookup::NotFound),
            Err(e) => MbidLookup::Failed(e.to_string()),
        }
    }
}
