//! Artist timeline batch tool library
//!
//! This library pulls a user's top artists from Spotify, resolves them to
//! MusicBrainz identifiers, enumerates their studio albums and reshapes the
//! result into a timeline table for a Gantt chart. Each stage reads one CSV
//! (or calls one API) and writes one CSV.
//!
//! # Modules
//!
//! - `cli` - One entry point per stage plus the chained `run`
//! - `config` - Configuration management and environment variables
//! - `management` - CSV table files and request throttling
//! - `musicbrainz` - MusicBrainz web service client
//! - `spotify` - Spotify Web API client (token refresh, top artists)
//! - `timeline` - Album table to Gantt timeline reshaping
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use artistline::{config, timeline};
//!
//! #[tokio::main]
//! async fn main() -> artistline::Res<()> {
//!     config::load_env().await?;
//!     let rows = timeline::reshape("artist_name,release_year,artist_index\nA,2001,1\n")?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod musicbrainz;
pub mod spotify;
pub mod timeline;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Boxed dynamic error with `Send + Sync` bounds so it can cross await
/// points on the tokio runtime.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Processing artist: {}", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Artists have been exported to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates with exit code 1 right after printing. Only use it for fatal
/// errors in the CLI layer; library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Error refreshing token: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems, e.g. a failed page that ends pagination
/// while keeping the results collected so far.
///
/// # Example
///
/// ```
/// warning!("Error fetching top artists: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
