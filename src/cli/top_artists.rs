use std::path::PathBuf;

use crate::{
    config, error,
    management::TableManager,
    spotify::{self, artists::TopArtistsOptions},
    success,
    types::ArtistRecord,
    utils, warning,
};

/// Fetches the user's top artists and writes them to `output`.
///
/// Refreshes the access token once, pages the top-artists endpoint and
/// writes one row per artist in ranking order. Nothing is written when no
/// artist could be fetched.
pub async fn top_artists(output: PathBuf, options: TopArtistsOptions) {
    let credentials = match config::spotify_credentials() {
        Ok(c) => c,
        Err(e) => error!("Missing Spotify credentials: {}", e),
    };

    let client = match utils::http_client(None) {
        Ok(c) => c,
        Err(e) => error!("Cannot build HTTP client: {}", e),
    };

    let token = match spotify::auth::refresh_access_token(
        &client,
        &config::spotify_apitoken_url(),
        &credentials,
    )
    .await
    {
        Ok(t) => t,
        Err(e) => error!("Error refreshing token: {}", e),
    };
    success!(
        "Access token refreshed (valid for {} seconds).",
        token.expires_in
    );

    let pb = utils::spinner(format!(
        "Fetching top {} artists ({})...",
        options.total, options.time_range
    ));
    let artists = spotify::artists::get_top_artists(
        &client,
        &config::spotify_apiurl(),
        &token.access_token,
        options,
    )
    .await;
    pb.finish_and_clear();

    if artists.is_empty() {
        warning!("No top artists fetched, {} not written.", output.display());
        return;
    }

    let records: Vec<ArtistRecord> = artists.iter().map(utils::artist_record).collect();
    let table = TableManager::new(output, records);
    if let Err(e) = table.persist().await {
        error!("Failed to write artists. Err: {}", e);
    }

    success!(
        "{} artists have been exported to {}",
        table.count(),
        table.path().display()
    );
}
