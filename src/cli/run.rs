use crate::{cli, config, info, spotify::artists::TopArtistsOptions};

/// Runs all four stages in order over the configured file paths.
pub async fn run(options: TopArtistsOptions) {
    let top_artists_csv = config::top_artists_csv();
    let mbid_csv = config::mbid_csv();
    let albums_csv = config::albums_csv();

    info!("Stage 1/4: top artists");
    cli::top_artists(top_artists_csv.clone(), options).await;

    info!("Stage 2/4: MusicBrainz identifiers");
    cli::mbids(top_artists_csv, mbid_csv.clone()).await;

    info!("Stage 3/4: studio albums");
    cli::albums(mbid_csv, albums_csv.clone()).await;

    info!("Stage 4/4: timeline");
    cli::gantt(albums_csv, config::gantt_csv()).await;
}
