use reqwest::Client;

use crate::{
    spotify::{SpotifyError, check_status},
    types::{TopArtist, TopArtistsResponse},
    utils::TimeRange,
    warning,
};

/// Spotify refuses more than 50 items per page.
pub const MAX_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopArtistsOptions {
    pub limit: u32,
    pub total: u32,
    pub time_range: TimeRange,
}

impl Default for TopArtistsOptions {
    fn default() -> Self {
        Self {
            limit: MAX_PAGE_SIZE,
            total: 100,
            time_range: TimeRange::LongTerm,
        }
    }
}

impl TopArtistsOptions {
    /// `(limit, offset)` of every page needed to cover `total` artists. The
    /// last page is shortened so no more than `total` are requested.
    pub fn pages(&self) -> Vec<(u32, u32)> {
        let limit = self.limit.clamp(1, MAX_PAGE_SIZE);
        (0..self.total)
            .step_by(limit as usize)
            .map(|offset| (limit.min(self.total - offset), offset))
            .collect()
    }
}

/// Retrieves one page of the user's top artists.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `api_url` - Web API base, e.g. `https://api.spotify.com/v1`
/// * `token` - Access token for bearer authentication
/// * `limit` - Page size (1-50)
/// * `offset` - Ranking position of the first artist on the page
/// * `time_range` - Window the ranking is computed over
pub async fn get_top_artists_page(
    client: &Client,
    api_url: &str,
    token: &str,
    limit: u32,
    offset: u32,
    time_range: TimeRange,
) -> Result<TopArtistsResponse, SpotifyError> {
    let api_url = format!("{uri}/me/top/artists", uri = api_url.trim_end_matches('/'));

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("time_range", time_range.to_string()),
        ])
        .send()
        .await?;

    let page = check_status(response)
        .await?
        .json::<TopArtistsResponse>()
        .await?;
    Ok(page)
}

/// Pages through the user's top artists until `options.total` is covered.
///
/// Artists are returned in ranking order. A page that fails is reported as a
/// warning and ends pagination; whatever was collected before it is still
/// returned. An empty page also ends pagination, since the user has no more
/// ranked artists.
///
/// # Example
///
/// ```
/// let artists = get_top_artists(&client, &config::spotify_apiurl(), &token.access_token, TopArtistsOptions::default()).await;
/// println!("Fetched {} artists", artists.len());
/// ```
pub async fn get_top_artists(
    client: &Client,
    api_url: &str,
    token: &str,
    options: TopArtistsOptions,
) -> Vec<TopArtist> {
    let mut all_artists: Vec<TopArtist> = Vec::new();

    for (limit, offset) in options.pages() {
        match get_top_artists_page(client, api_url, token, limit, offset, options.time_range).await
        {
            Ok(page) => {
                if page.items.is_empty() {
                    break;
                }
                all_artists.extend(page.items);
            }
            Err(e) => {
                warning!("Error fetching top artists: {}", e);
                break;
            }
        }
    }

    all_artists
}
