use std::path::PathBuf;

use indicatif::ProgressBar;
use tabled::Table;

use crate::{
    error,
    management::TableManager,
    musicbrainz::MusicBrainzClient,
    success,
    types::{ArtistInput, MbidRecord, ResolutionTableRow},
    utils,
};

/// Resolves every artist in `input` to an MBID and writes `output`.
///
/// The output has exactly one row per input row, holding either the MBID or
/// one of the sentinels `Not Found`, `Service Unavailable` or
/// `An error occurred: ...`.
pub async fn mbids(input: PathBuf, output: PathBuf) {
    let artists = match TableManager::<ArtistInput>::load(&input).await {
        Ok(table) => table.into_rows(),
        Err(e) => error!("Cannot read artists. Err: {}", e),
    };

    let client = match MusicBrainzClient::from_config() {
        Ok(c) => c,
        Err(e) => error!("Cannot build MusicBrainz client: {}", e),
    };

    let pb = utils::progress_bar(artists.len());
    let records = resolve_artists(&client, artists, &pb).await;
    pb.finish_and_clear();

    let table = TableManager::new(output, records);
    if let Err(e) = table.persist().await {
        error!("Failed to write MBIDs. Err: {}", e);
    }

    let summary: Vec<ResolutionTableRow> = utils::summarize_resolutions(table.rows())
        .into_iter()
        .map(|(outcome, artists)| ResolutionTableRow { outcome, artists })
        .collect();
    println!("{}", Table::new(summary));

    success!("Results have been written to {}", table.path().display());
}

/// Resolves artists one after the other, in input order.
pub async fn resolve_artists(
    client: &MusicBrainzClient,
    artists: Vec<ArtistInput>,
    pb: &ProgressBar,
) -> Vec<MbidRecord> {
    let mut records = Vec::with_capacity(artists.len());

    for artist in artists {
        pb.set_message(artist.name.clone());
        let lookup = client.resolve_spotify_artist(&artist.spotify_id).await;

        records.push(MbidRecord {
            name: artist.name,
            spotify_id: artist.spotify_id,
            profile_image: artist.profile_image,
            mbid: lookup.to_string(),
        });
        pb.inc(1);
    }

    records
}
