use std::{collections::BTreeSet, fmt, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use uuid::Uuid;

use crate::types::{ArtistRecord, Image, MbidRecord, ReleaseGroup, TopArtist, UrlLookupResponse};

pub const PROFILE_IMAGE_MISSING: &str = "N/A";
pub const UNKNOWN: &str = "Unknown";
pub const NOT_FOUND: &str = "Not Found";
pub const SERVICE_UNAVAILABLE: &str = "Service Unavailable";
pub const FREE_STREAMING: &str = "free streaming";
pub const ACCEPTED_COUNTRIES: [&str; 2] = ["GB", "US"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MBID_LEN: usize = 36;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    #[default]
    LongTerm,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [
        TimeRange::ShortTerm,
        TimeRange::MediumTerm,
        TimeRange::LongTerm,
    ];
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        };
        f.write_str(s)
    }
}

/// Parses a time range as accepted by the top-items endpoint. Hyphens,
/// surrounding whitespace and case are tolerated (`Long-Term` works).
pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    let norm = s.trim().to_ascii_lowercase().replace('-', "_");
    if norm.is_empty() {
        return Err("time range cannot be empty".to_string());
    }

    TimeRange::ALL
        .into_iter()
        .find(|r| r.to_string() == norm)
        .ok_or_else(|| {
            format!(
                "invalid value '{}'. Allowed: short_term, medium_term, long_term",
                s.trim()
            )
        })
}

pub fn join_genres(genres: &[String]) -> String {
    genres.join(", ")
}

pub fn profile_image(images: &[Image]) -> String {
    images
        .first()
        .map(|i| i.url.clone())
        .unwrap_or_else(|| PROFILE_IMAGE_MISSING.to_string())
}

pub fn artist_record(artist: &TopArtist) -> ArtistRecord {
    ArtistRecord {
        name: artist.name.clone(),
        id: artist.id.clone(),
        genres: join_genres(&artist.genres),
        popularity: artist.popularity,
        followers: artist.followers.total,
        uri: artist.uri.clone(),
        profile_image: profile_image(&artist.images),
    }
}

pub fn spotify_artist_url(spotify_id: &str) -> String {
    format!("https://open.spotify.com/artist/{}", spotify_id.trim())
}

/// Artist id of the first `free streaming` relation that names an artist.
pub fn free_streaming_artist(lookup: &UrlLookupResponse) -> Option<String> {
    lookup
        .relations
        .iter()
        .filter(|r| r.relation_type == FREE_STREAMING)
        .find_map(|r| r.artist.as_ref().map(|a| a.id.clone()))
}

/// Whether `value` is a MusicBrainz identifier in its hyphenated form.
///
/// Simple, braced and URN spellings of a UUID are rejected since
/// MusicBrainz never emits them.
pub fn is_mbid(value: &str) -> bool {
    let value = value.trim();
    value.len() == MBID_LEN && Uuid::try_parse(value).is_ok()
}

pub fn is_studio_album(group: &ReleaseGroup) -> bool {
    group
        .secondary_types
        .as_ref()
        .is_none_or(|types| types.is_empty())
}

/// First four characters of a release date, `Unknown` when the date is absent.
pub fn release_year(first_release_date: Option<&str>) -> String {
    match first_release_date {
        Some(date) => date.chars().take(4).collect(),
        None => UNKNOWN.to_string(),
    }
}

/// Sorted, deduplicated intersection of `countries` with [`ACCEPTED_COUNTRIES`].
pub fn accepted_countries<I, S>(countries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    countries
        .into_iter()
        .map(|c| c.as_ref().trim().to_string())
        .filter(|c| ACCEPTED_COUNTRIES.contains(&c.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Coerces a raw release year to an integer.
///
/// Accepts an integer or a finite float (truncated toward zero). Anything
/// unparseable, or outside the `i32` range, becomes 0.
pub fn coerce_year(raw: &str) -> i32 {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i64>() {
        return i32::try_from(year).unwrap_or(0);
    }
    match raw.parse::<f64>() {
        Ok(year) if year.is_finite() => {
            let year = year.trunc();
            if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&year) {
                year as i32
            } else {
                0
            }
        }
        _ => 0,
    }
}

/// Buckets resolver output by outcome, in a fixed display order.
pub fn summarize_resolutions(records: &[MbidRecord]) -> Vec<(String, usize)> {
    let mut resolved = 0;
    let mut not_found = 0;
    let mut unavailable = 0;
    let mut failed = 0;

    for record in records {
        match record.mbid.as_str() {
            NOT_FOUND => not_found += 1,
            SERVICE_UNAVAILABLE => unavailable += 1,
            mbid if is_mbid(mbid) => resolved += 1,
            _ => failed += 1,
        }
    }

    vec![
        ("resolved".to_string(), resolved),
        (NOT_FOUND.to_string(), not_found),
        (SERVICE_UNAVAILABLE.to_string(), unavailable),
        ("error".to_string(), failed),
    ]
}

pub fn http_client(user_agent: Option<&str>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().timeout(REQUEST_TIMEOUT);
    if let Some(agent) = user_agent {
        builder = builder.user_agent(agent.to_string());
    }
    builder.build()
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

pub fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} [{bar:30.blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );
    pb
}
