//! CLI command definitions
//!
//! Defines the clap commands for the smoke test CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the smoke test suite against the cluster
    Run {
        /// Path to a YAML scenario file (default: the built-in workflow)
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Path to the configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base directory step working directories are resolved against
        /// (default: the current directory)
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Override the cluster domain
        #[arg(long)]
        domain: Option<String>,

        /// Override the SSH key path
        #[arg(long)]
        auth_key: Option<String>,

        /// Override the example application name
        #[arg(long)]
        app: Option<String>,

        /// Resolve and print every step without executing anything
        #[arg(long)]
        dry_run: bool,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
    },

    /// Print the scenario's steps after template resolution
    List {
        /// Path to a YAML scenario file (default: the built-in workflow)
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Path to the configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Base directory step working directories are resolved against
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Output the resolved steps as JSON
        #[arg(long)]
        json: bool,
    },
}
