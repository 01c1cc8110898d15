//! # CLI Module
//!
//! One entry point per pipeline stage, plus [`run`] which chains them. The
//! stages only talk to each other through the CSV files on disk:
//!
//! ```text
//! top-artists ──► top_100_artists.csv
//! mbids       ──► artists_mbid.csv
//! albums      ──► all_artists_albums.csv
//! gantt       ──► gantt_chart_data_format.csv
//! ```
//!
//! ## Error Handling
//!
//! Stage entry points are fatal on errors that make the output meaningless
//! (no credentials, rejected token exchange, unreadable input, missing
//! columns): they report through [`crate::error`] and exit with status 1.
//! Per-artist failures are never fatal; they end up as sentinels in the
//! output (`mbids`) or as warnings (`top-artists`, `albums`).
//!
//! ## Usage
//!
//! ```bash
//! artistline top-artists --total 100     # Spotify top artists
//! artistline mbids                       # Spotify ID -> MBID
//! artistline albums                      # studio albums released in GB/US
//! artistline gantt                       # timeline for the chart
//! artistline run                         # all of the above
//! ```

mod albums;
mod gantt;
mod mbids;
mod run;
mod top_artists;

pub use albums::albums;
pub use albums::enumerate_albums;
pub use gantt::gantt;
pub use mbids::mbids;
pub use mbids::resolve_artists;
pub use run::run;
pub use top_artists::top_artists;
