use std::path::PathBuf;

use indicatif::ProgressBar;

use crate::{
    error,
    management::TableManager,
    musicbrainz::MusicBrainzClient,
    success,
    types::{AlbumRecord, MbidInput},
    utils, warning,
};

/// Enumerates the studio albums of every artist in `input` and writes one
/// row per qualifying album to `output`.
pub async fn albums(input: PathBuf, output: PathBuf) {
    let artists = match TableManager::<MbidInput>::load(&input).await {
        Ok(table) => table.into_rows(),
        Err(e) => error!("Cannot read artist MBIDs. Err: {}", e),
    };

    let client = match MusicBrainzClient::from_config() {
        Ok(c) => c,
        Err(e) => error!("Cannot build MusicBrainz client: {}", e),
    };

    let pb = utils::progress_bar(artists.len());
    let records = enumerate_albums(&client, artists, &pb).await;
    pb.finish_and_clear();

    let table = TableManager::new(output, records);
    if let Err(e) = table.persist().await {
        error!("Failed to write albums. Err: {}", e);
    }

    success!(
        "{} albums have been written to {}",
        table.count(),
        table.path().display()
    );
}

/// Collects albums artist by artist. `artist_index` is the 1-based position
/// of the artist in `artists`; rows without a usable MBID keep their
/// position but are not queried.
pub async fn enumerate_albums(
    client: &MusicBrainzClient,
    artists: Vec<MbidInput>,
    pb: &ProgressBar,
) -> Vec<AlbumRecord> {
    let mut all_albums: Vec<AlbumRecord> = Vec::new();

    for (position, artist) in artists.into_iter().enumerate() {
        let artist_index = position + 1;
        let mbid = artist.mbid.trim();

        if !utils::is_mbid(mbid) {
            pb.suspend(|| {
                warning!(
                    "Skipping artist {} without MBID ({})",
                    artist.name,
                    artist.mbid
                )
            });
            pb.inc(1);
            continue;
        }

        pb.set_message(format!("{} ({})", artist.name, mbid));
        let albums = client
            .get_studio_albums(&artist.name, artist_index, mbid)
            .await;
        all_albums.extend(albums);
        pb.inc(1);
    }

    all_albums
}
