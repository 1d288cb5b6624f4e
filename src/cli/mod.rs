//! CLI command handling
//!
//! Loads configuration, builds the run context and dispatches commands.

use std::env;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::Result;
use crate::suite::{self, RunOptions, Scenario};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            scenario,
            config,
            base_dir,
            domain,
            auth_key,
            app,
            dry_run,
            verbose,
        } => {
            let mut cfg = Config::load(config.as_deref())?;
            if let Some(domain) = domain {
                cfg.domain = domain;
            }
            if let Some(auth_key) = auth_key {
                cfg.auth_key = auth_key;
            }
            if let Some(app) = app {
                cfg.example_app = app;
            }

            let scenario = load_scenario(scenario.as_deref())?;
            let base_dir = resolve_base_dir(base_dir)?;
            let context = cfg.context();
            let options = RunOptions { verbose, dry_run };

            let result = suite::run_suite(&scenario, &context, &base_dir, &options).await;
            match result.failure {
                None => Ok(()),
                Some(failure) => Err(failure.error),
            }
        }

        Commands::List {
            scenario,
            config,
            base_dir,
            json,
        } => {
            let cfg = Config::load(config.as_deref())?;
            let scenario = load_scenario(scenario.as_deref())?;
            let base_dir = resolve_base_dir(base_dir)?;
            let context = cfg.context();

            let resolved = scenario
                .steps
                .iter()
                .map(|step| suite::resolve_step(step, &context, &base_dir))
                .collect::<Result<Vec<_>>>()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                println!("{} {}", "Scenario:".blue().bold(), scenario.name.bold());
                for (i, step) in resolved.iter().enumerate() {
                    match &step.dir {
                        Some(dir) => {
                            println!("{:2}. ({}) {}", i + 1, dir.display(), step.cmd.trim())
                        }
                        None => println!("{:2}. {}", i + 1, step.cmd.trim()),
                    }
                }
            }
            Ok(())
        }
    }
}

fn load_scenario(path: Option<&Path>) -> Result<Scenario> {
    match path {
        Some(path) => Scenario::load(path),
        None => Ok(suite::default_scenario()),
    }
}

fn resolve_base_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(env::current_dir()?),
    }
}
