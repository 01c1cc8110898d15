use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use artistline::{
    cli, config, error,
    spotify::artists::{MAX_PAGE_SIZE, TopArtistsOptions},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch your top artists from Spotify
    TopArtists(TopArtistsArgs),

    /// Resolve Spotify artist IDs to MusicBrainz IDs
    Mbids(StageOptions),

    /// Enumerate studio albums released in GB or US
    Albums(StageOptions),

    /// Reshape the album table into Gantt chart data
    Gantt(StageOptions),

    /// Run all stages in order with the configured files
    Run(TopArtistsArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TopArtistsArgs {
    /// Output CSV (defaults to ARTISTLINE_TOP_ARTISTS_CSV or top_100_artists.csv)
    #[clap(long)]
    pub output: Option<PathBuf>,

    /// Number of top artists to fetch
    #[clap(long, default_value_t = 100)]
    pub total: u32,

    /// Artists per request (1-50)
    #[clap(long, default_value_t = MAX_PAGE_SIZE)]
    pub limit: u32,

    /// Ranking window: short_term, medium_term or long_term
    #[clap(long, default_value = "long_term", value_parser = utils::parse_time_range)]
    pub time_range: utils::TimeRange,
}

impl TopArtistsArgs {
    fn options(&self) -> TopArtistsOptions {
        TopArtistsOptions {
            limit: self.limit,
            total: self.total,
            time_range: self.time_range,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct StageOptions {
    /// Input CSV (defaults to the previous stage's configured output)
    #[clap(long)]
    pub input: Option<PathBuf>,

    /// Output CSV (defaults to this stage's configured output)
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::TopArtists(opt) => {
            let output = opt.output.clone().unwrap_or_else(config::top_artists_csv);
            cli::top_artists(output, opt.options()).await
        }
        Command::Mbids(opt) => {
            cli::mbids(
                opt.input.unwrap_or_else(config::top_artists_csv),
                opt.output.unwrap_or_else(config::mbid_csv),
            )
            .await
        }
        Command::Albums(opt) => {
            cli::albums(
                opt.input.unwrap_or_else(config::mbid_csv),
                opt.output.unwrap_or_else(config::albums_csv),
            )
            .await
        }
        Command::Gantt(opt) => {
            cli::gantt(
                opt.input.unwrap_or_else(config::albums_csv),
                opt.output.unwrap_or_else(config::gantt_csv),
            )
            .await
        }
        Command::Run(opt) => cli::run(opt.options()).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
