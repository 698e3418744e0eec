use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sptrendcli::{cli, config::Config, error};

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
    /// Authorize with Spotify API
    Auth(AuthOptions),

    /// Show your top tracks
    Tracks(TracksOptions),

    /// Forecast popularity of your top tracks
    Forecast(ForecastOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Print the authorization URL instead of opening the browser
    #[clap(long)]
    pub print_url: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Number of top tracks to fetch (max 50)
    #[clap(long, default_value_t = 10)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ForecastOptions {
    /// Number of top tracks to fetch (max 50)
    #[clap(long, default_value_t = 10)]
    pub limit: u32,

    /// Number of future days to project
    #[clap(long, default_value_t = 30)]
    pub horizon: usize,

    /// Path of the PNG chart to write
    #[clap(long, default_value = "popularity_forecast.png")]
    pub output: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        }
        command => {
            // Everything except completions talks to the API and needs a
            // validated configuration first.
            let config = match Config::from_env().await {
                Ok(config) => config,
                Err(e) => error!("Cannot load configuration. Err: {}", e),
            };

            match command {
                Command::Auth(opt) => cli::auth(&config, opt.print_url).await,
                Command::Tracks(opt) => cli::tracks(&config, opt.limit).await,
                Command::Forecast(opt) => {
                    cli::forecast(&config, opt.limit, opt.horizon, &opt.output).await
                }
                Command::Completions(_) => unreachable!(),
            }
        }
    }
}
