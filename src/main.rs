//! Smoke test CLI - exercises a basic Deis workflow against a live cluster
//!
//! Registers a user, pushes an example app, and looks for the expected HTTP
//! response, failing on the first step that breaks.

use clap::Parser;
use smoketest::{cli, commands::Commands, common};

#[derive(Parser)]
#[command(name = "smoketest", about = "End-to-end smoke tests for a Deis cluster")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
