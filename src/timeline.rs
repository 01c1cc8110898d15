//! Album table to Gantt timeline reshaping.
//!
//! Groups the album table by artist and reduces each group to the first and
//! last release year. Release years that do not parse become 0 instead of
//! being dropped, so an artist with an unparseable year starts at 0. Years
//! are bounded to `i32`, anything larger is treated as unparseable.

use std::{collections::BTreeMap, fmt};

use crate::{types::TimelineRecord, utils};

pub const REQUIRED_COLUMNS: [&str; 3] = ["artist_name", "release_year", "artist_index"];

#[derive(Debug)]
pub enum TimelineError {
    MissingColumns(Vec<String>),
    CsvError(csv::Error),
}

impl From<csv::Error> for TimelineError {
    fn from(err: csv::Error) -> Self {
        TimelineError::CsvError(err)
    }
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineError::MissingColumns(missing) => write!(
                f,
                "The CSV file must contain the following columns: {} (missing: {})",
                REQUIRED_COLUMNS.join(", "),
                missing.join(", ")
            ),
            TimelineError::CsvError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TimelineError {}

struct Span {
    artist_index: String,
    start: i32,
    end: i32,
}

/// Trimmed header names of an album table.
pub fn columns(content: &str) -> Result<Vec<String>, TimelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());
    Ok(reader.headers()?.iter().map(str::to_string).collect())
}

/// Required columns absent from `columns`, in [`REQUIRED_COLUMNS`] order.
pub fn missing_columns(columns: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .map(|c| c.to_string())
        .collect()
}

/// Reshapes album CSV content into one timeline row per artist.
///
/// The header is validated before any row is read. Rows are grouped by
/// `artist_name` (rows with an empty name are skipped) and the output is
/// ordered by artist name. `artist_index` is the first non-empty index seen
/// for the artist; `duration` is `end_year - start_year`, never negative.
///
/// # Errors
///
/// - `MissingColumns` - any of [`REQUIRED_COLUMNS`] is absent
/// - `CsvError` - the content is not readable CSV
pub fn reshape(content: &str) -> Result<Vec<TimelineRecord>, TimelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(TimelineError::MissingColumns(missing));
    }

    let position = |name: &str| headers.iter().position(|h| h == name).unwrap_or_default();
    let name_at = position("artist_name");
    let year_at = position("release_year");
    let index_at = position("artist_index");

    let mut spans: BTreeMap<String, Span> = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(name_at).unwrap_or_default();
        if name.is_empty() {
            continue;
        }

        let year = utils::coerce_year(record.get(year_at).unwrap_or_default());
        let index = record.get(index_at).unwrap_or_default().trim();

        let span = spans.entry(name.to_string()).or_insert(Span {
            artist_index: String::new(),
            start: year,
            end: year,
        });
        if span.artist_index.is_empty() {
            span.artist_index = index.to_string();
        }
        span.start = span.start.min(year);
        span.end = span.end.max(year);
    }

    Ok(spans
        .into_iter()
        .map(|(artist_name, span)| {
            let start_year = span.start.to_string();
            let end_year = span.end.to_string();
            TimelineRecord {
                artist_name,
                artist_index: span.artist_index,
                duration: i64::from(span.end) - i64::from(span.start),
                start_year,
                end_year,
            }
        })
        .collect())
}
