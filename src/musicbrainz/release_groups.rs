use crate::{
    musicbrainz::{MusicBrainzClient, MusicBrainzError},
    types::{AlbumRecord, ReleaseGroup, ReleaseGroupPage, ReleasePage},
    utils::{self, UNKNOWN},
    warning,
};

pub const RELEASE_GROUP_PAGE_SIZE: usize = 100;

impl MusicBrainzClient {
    /// Fetches one page of the artist's release-groups of primary type album.
    ///
    /// # Arguments
    ///
    /// * `artist_mbid` - MusicBrainz artist id
    /// * `offset` - Index of the first group on the page, a multiple of [`RELEASE_GROUP_PAGE_SIZE`]
    ///
    /// # Returns
    ///
    /// - `Ok(ReleaseGroupPage)` - Up to [`RELEASE_GROUP_PAGE_SIZE`] groups
    /// - `Err(MusicBrainzError::Status)` - Non-success answer, after 503 retries ran out
    /// - `Err(MusicBrainzError::Request)` - Transport failure or undecodable body
    pub async fn get_release_groups(
        &self,
        artist_mbid: &str,
        offset: usize,
    ) -> Result<ReleaseGroupPage, MusicBrainzError> {
        let limit = RELEASE_GROUP_PAGE_SIZE.to_string();
        let offset = offset.to_string();
        let query = [
            ("artist", artist_mbid),
            ("type", "album"),
            ("fmt", "json"),
            ("limit", limit.as_str()),
            ("offset", offset.as_str()),
        ];

        let response = self.get("release-group", &query).await?;
        if !response.status().is_success() {
            return Err(MusicBrainzError::Status(response.status()));
        }

        Ok(response.json::<ReleaseGroupPage>().await?)
    }

    /// Release countries of every release in the group, in API order.
    ///
    /// Releases without a country are skipped. Any failure is treated as
    /// "no countries", which excludes the group downstream.
    ///
    /// # Arguments
    ///
    /// * `release_group_id` - MusicBrainz release-group id
    ///
    /// # Returns
    ///
    /// Raw country codes, duplicates included; empty on failure.
    pub async fn get_release_countries(&self, release_group_id: &str) -> Vec<String> {
        let query = [("release-group", release_group_id), ("fmt", "json")];

        let response = match self.get("release", &query).await {
            Ok(response) if response.status().is_success() => response,
            _ => return Vec::new(),
        };

        match response.json::<ReleasePage>().await {
            Ok(page) => page
                .releases
                .into_iter()
                .filter_map(|r| r.country)
                .filter(|c| !c.is_empty())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Collects the artist's studio albums released in GB or US.
    ///
    /// Release-groups with any secondary type (live, compilation, ...) are
    /// dropped before their releases are queried. Pagination stops on a page
    /// shorter than [`RELEASE_GROUP_PAGE_SIZE`]; a failed page is reported and
    /// stops pagination for this artist, keeping albums already collected.
    ///
    /// # Arguments
    ///
    /// * `artist_name` - Copied into every album row
    /// * `artist_index` - 1-based position of the artist in the input table
    /// * `artist_mbid` - MusicBrainz artist id to browse
    ///
    /// # Returns
    ///
    /// One [`AlbumRecord`] per qualifying group, in API order.
    pub async fn get_studio_albums(
        &self,
        artist_name: &str,
        artist_index: usize,
        artist_mbid: &str,
    ) -> Vec<AlbumRecord> {
        let mut albums: Vec<AlbumRecord> = Vec::new();
        let mut offset = 0;

        loop {
            let page = match self.get_release_groups(artist_mbid, offset).await {
                Ok(page) => page,
                Err(e) => {
                    warning!(
                        "Unable to fetch release groups for {} ({})",
                        artist_name,
                        e
                    );
                    break;
                }
            };

            let fetched = page.release_groups.len();
            for group in page.release_groups.iter().filter(|g| utils::is_studio_album(g)) {
                let countries = self.get_release_countries(&group.id).await;
                let countries = utils::accepted_countries(countries);
                if countries.is_empty() {
                    continue;
                }

                albums.push(album_record(
                    group,
                    artist_name,
                    artist_index,
                    artist_mbid,
                    &countries,
                ));
            }

            if fetched < RELEASE_GROUP_PAGE_SIZE {
                break;
            }
            offset += RELEASE_GROUP_PAGE_SIZE;
        }

        albums
    }
}

fn album_record(
    group: &ReleaseGroup,
    artist_name: &str,
    artist_index: usize,
    artist_mbid: &str,
    countries: &[String],
) -> AlbumRecord {
    AlbumRecord {
        artist_name: artist_name.to_string(),
        artist_index,
        title: group.title.clone(),
        primary_type: group
            .primary_type
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string()),
        release_year: utils::release_year(group.first_release_date.as_deref()),
        artist_mbid: artist_mbid.to_string(),
        secondary_types: String::new(),
        release_countries: countries.join(", "),
    }
}
