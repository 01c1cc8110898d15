use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Spotify access token obtained through the refresh-token grant.
///
/// Kept in memory for the duration of the top-artists stage only; it is
/// never persisted nor printed.
///
/// # Fields
///
/// * `access_token` - Bearer token for the Web API
/// * `scope` - Space-separated scopes granted to the token
/// * `expires_in` - Lifetime in seconds, counted from `obtained_at`
/// * `obtained_at` - Unix timestamp of the exchange
#[derive(Debug, Clone)]
pub struct Token {
    pub access_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Body of a successful token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// One page of `GET /me/top/artists`, ranked best first.
#[derive(Debug, Clone, Deserialize)]
pub struct TopArtistsResponse {
    pub items: Vec<TopArtist>,
}

/// Artist object as returned inside a top-artists page.
///
/// Only the fields written to the artist CSV are kept. Missing genres,
/// followers or images fall back to empty values instead of failing the
/// whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct TopArtist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub followers: Followers,
    pub uri: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Followers {
    pub total: u64,
}

/// Profile image; Spotify lists the largest one first.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

/// Row of the top-artists CSV.
///
/// # Columns
///
/// `Name,ID,Genres,Popularity,Followers,URI,Profile Image`, where `Genres`
/// is the comma-joined genre list and `Profile Image` is the first image URL
/// or `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Genres")]
    pub genres: String,
    #[serde(rename = "Popularity")]
    pub popularity: u32,
    #[serde(rename = "Followers")]
    pub followers: u64,
    #[serde(rename = "URI")]
    pub uri: String,
    #[serde(rename = "Profile Image")]
    pub profile_image: String,
}

/// The columns the resolver reads from the artist CSV. Any other column is
/// ignored.
///
/// The Spotify id is taken from `SpotifyID`, or from `ID` (the column the
/// top-artists stage writes) when `SpotifyID` is absent or empty. A file
/// carrying both columns is read from `SpotifyID`. A file with neither is
/// rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawArtistInput")]
pub struct ArtistInput {
    pub name: String,
    pub spotify_id: String,
    pub profile_image: String,
}

#[derive(Deserialize)]
struct RawArtistInput {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "SpotifyID")]
    spotify_id: Option<String>,
    #[serde(rename = "ID")]
    id: Option<String>,
    #[serde(rename = "Profile Image")]
    profile_image: String,
}

impl TryFrom<RawArtistInput> for ArtistInput {
    type Error = String;

    fn try_from(raw: RawArtistInput) -> Result<Self, Self::Error> {
        let spotify_id = raw
            .spotify_id
            .filter(|id| !id.trim().is_empty())
            .or(raw.id)
            .ok_or_else(|| format!("missing SpotifyID or ID for artist '{}'", raw.name))?;

        Ok(Self {
            name: raw.name,
            spotify_id,
            profile_image: raw.profile_image,
        })
    }
}

/// Row of the MBID CSV written by the resolver.
///
/// `MBID` holds either the MusicBrainz artist id or one of the sentinels
/// `Not Found`, `Service Unavailable` and `An error occurred: ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MbidRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "SpotifyID")]
    pub spotify_id: String,
    #[serde(rename = "Profile Image")]
    pub profile_image: String,
    #[serde(rename = "MBID")]
    pub mbid: String,
}

/// The columns the album enumerator reads from the MBID CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct MbidInput {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MBID")]
    pub mbid: String,
}

/// One studio album with at least one release in GB or US.
///
/// # Fields
///
/// * `artist_index` - 1-based position of the artist in the MBID CSV
/// * `release_year` - First four characters of the first release date, or `Unknown`
/// * `secondary_types` - Always empty, groups with secondary types are dropped
/// * `release_countries` - Sorted accepted countries joined with `", "`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub artist_name: String,
    pub artist_index: usize,
    pub title: String,
    pub primary_type: String,
    pub release_year: String,
    pub artist_mbid: String,
    pub secondary_types: String,
    pub release_countries: String,
}

/// One bar of the Gantt chart: an artist's first and last album year.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct TimelineRecord {
    pub artist_name: String,
    pub artist_index: String,
    pub start_year: String,
    pub end_year: String,
    pub duration: i64,
}

/// Line of the resolver summary table.
#[derive(Tabled)]
pub struct ResolutionTableRow {
    pub outcome: String,
    pub artists: usize,
}

/// Response of `GET /url/?resource=...&inc=artist-rels`.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlLookupResponse {
    #[serde(default)]
    pub relations: Vec<UrlRelation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlRelation {
    #[serde(rename = "type")]
    pub relation_type: String,
    pub artist: Option<RelationArtist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelationArtist {
    pub id: String,
}

/// One page of `GET /release-group?artist=...&type=album`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseGroupPage {
    #[serde(rename = "release-groups", default)]
    pub release_groups: Vec<ReleaseGroup>,
}

/// A release-group of primary type album.
///
/// `secondary_types` is `None` or empty for studio albums; live albums,
/// compilations, remixes and the like carry at least one entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseGroup {
    pub id: String,
    pub title: String,
    #[serde(rename = "primary-type")]
    pub primary_type: Option<String>,
    #[serde(rename = "secondary-types", default)]
    pub secondary_types: Option<Vec<String>>,
    #[serde(rename = "first-release-date")]
    pub first_release_date: Option<String>,
}

/// Response of `GET /release?release-group=...`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleasePage {
    #[serde(default)]
    pub releases: Vec<Release>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub country: Option<String>,
}

/// Column order of a CSV file written by one of the stages.
///
/// The header is written explicitly so that an empty table still carries it.
pub trait CsvRow {
    const HEADERS: &'static [&'static str];
}

impl CsvRow for ArtistRecord {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "ID",
        "Genres",
        "Popularity",
        "Followers",
        "URI",
        "Profile Image",
    ];
}

impl CsvRow for MbidRecord {
    const HEADERS: &'static [&'static str] = &["Name", "SpotifyID", "Profile Image", "MBID"];
}

impl CsvRow for AlbumRecord {
    const HEADERS: &'static [&'static str] = &[
        "artist_name",
        "artist_index",
        "title",
        "primary_type",
        "release_year",
        "artist_mbid",
        "secondary_types",
        "release_countries",
    ];
}

impl CsvRow for TimelineRecord {
    const HEADERS: &'static [&'static str] = &[
        "artist_name",
        "artist_index",
        "start_year",
        "end_year",
        "duration",
    ];
}
