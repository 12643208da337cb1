//! odoread: clean odometer OCR readings and crop capture frames.

mod cli;
mod input;
mod output;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    // Logs go to stderr, results to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    use output::Output;

    let output = Output::new(cli.json);
    let config = input::load_config(cli.config.as_deref(), &output)?;

    match cli.command {
        Commands::Normalize(args) => cli::commands::normalize::run(args, &config, &output),
        Commands::Format(args) => cli::commands::format::run(args, &config, &output),
        Commands::Redisplay(args) => cli::commands::redisplay::run(args, &config, &output),
        Commands::Geometry(args) => cli::commands::geometry::run(args, &config, &output),
        Commands::Crop(args) => cli::commands::crop::run(args, &config, &output),
        Commands::Read(args) => cli::commands::read::run(args, config, &output, cli.timeout).await,
    }
}
