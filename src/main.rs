mod cli;
mod commands;
mod config;
mod country;
mod directory;
mod env;
mod error;
mod http;
mod logging;
mod source;
mod tui;

use clap::Parser;
use error::{ErrorFormatter, RichError};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;

    if let Err(err) = commands::dispatch(cli).await {
        tracing::debug!(error = %err, "command failed");
        let rich = RichError::from(err);
        eprintln!("{}", ErrorFormatter::new(verbose).format(&rich));
        std::process::exit(1);
    }
}
