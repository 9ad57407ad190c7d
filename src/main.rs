//! bpdb — BPDB smart-meter CLI.
//!
//! Each subcommand creates a fresh client, performs exactly one API call, and
//! renders the result. Any error funnels through the single boundary below:
//! one prefixed line on stderr, exit code 1.

mod cli;
mod commands;

use clap::Parser;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::dispatch(&cli.command).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
