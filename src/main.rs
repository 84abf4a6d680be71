use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
    error::ErrorKind,
};
use clap_complete::{Shell, generate};

use spotportcli::{cli, config, spotify::SpotifyClient, warning};

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
    /// Create a Spotify playlist from an AWA playlist
    Create(CreateOptions),

    /// Add the tracks of an AWA playlist to an existing Spotify playlist
    Add(AddOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// AWA playlist URL to port
    pub source_url: String,

    /// Name of the created playlist; defaults to the scraped name
    #[clap(long)]
    pub name: Option<String>,

    /// Description of the created playlist; defaults to the scraped description
    #[clap(long)]
    pub desc: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// AWA playlist URL to port
    pub source_url: String,

    /// Spotify playlist URL to add the tracks to
    pub destination_url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let Some(token) = config::token() else {
        println!("The environment variable \"TOKEN\" must be set to a Spotify access token.");
        std::process::exit(1);
    };

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                }
                // Usage problems print the help text and are not an error.
                _ => {
                    let _ = Cli::command().print_help();
                }
            }
            return;
        }
    };

    let client = SpotifyClient::new(token);

    match cli.command {
        Command::Create(opt) => cli::create(&client, &opt.source_url, opt.name, opt.desc).await,
        Command::Add(opt) => cli::add(&client, &opt.source_url, &opt.destination_url).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
