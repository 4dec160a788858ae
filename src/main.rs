use anyhow::Result;
use clap::Parser;
use gorel::commands::{ListOptions, list};

/// gorel - Go release lister
///
/// Lists Go toolchain releases published at https://go.dev/dl/.
///
/// Examples:
///   gorel                     # All releases with their downloads
///   gorel --latest --local    # Newest stable release, files for this machine
///   gorel --latest --simple   # Just the newest stable version number
#[derive(Parser, Debug)]
#[command(author, version = env!("GOREL_VERSION"), about)]
struct Cli {
    /// Show only the latest stable release
    #[arg(long)]
    latest: bool,

    /// Show only downloads for the current OS/architecture
    #[arg(long)]
    local: bool,

    /// Print only version numbers (e.g. 1.21.0)
    #[arg(long)]
    simple: bool,
}

impl From<Cli> for ListOptions {
    fn from(cli: Cli) -> Self {
        ListOptions {
            latest: cli.latest,
            local: cli.local,
            simple: cli.simple,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    list(cli.into()).await
}
