use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Credentials,
    spotify::{SpotifyError, check_status},
    types::{Token, TokenResponse},
};

/// Builds the `Authorization: Basic ...` value from the client credentials.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let encoded = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

/// Exchanges the configured refresh token for a fresh access token.
///
/// Sends the refresh-token grant to `token_url`, authenticating the
/// application with HTTP Basic credentials built from the client id and
/// secret.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id, client secret and refresh token
///
/// # Returns
///
/// - `Ok(Token)` - Access token with scope, lifetime and the time it was obtained
/// - `Err(SpotifyError::Status)` - Spotify rejected the exchange; carries status and body
/// - `Err(SpotifyError::Request)` - Network failure or an undecodable response
///
/// # Example
///
/// ```
/// let credentials = config::spotify_credentials()?;
/// let token = refresh_access_token(&client, &config::spotify_apitoken_url(), &credentials).await?;
/// ```
pub async fn refresh_access_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token, SpotifyError> {
    let response = client
        .post(token_url)
        .header(
            AUTHORIZATION,
            basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?;

    let json = check_status(response).await?.json::<TokenResponse>().await?;

    Ok(Token {
        access_token: json.access_token,
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
