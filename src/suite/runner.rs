//! Suite driver and step executor
//!
//! Walks the scenario table in order, resolving each step's templates
//! against the run context and handing the command to the shell. The first
//! failing step aborts the run; later steps are never resolved or executed,
//! and nothing is rolled back - cleanup of external side effects (a created
//! app, a pushed branch) is the operator's responsibility.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use crate::common::{Error, Result};
use crate::template::{self, Context};

use super::config::{Scenario, TestStep};
use super::shell;

/// Options controlling a suite run
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Print the working directory of each step
    pub verbose: bool,
    /// Resolve and print every step without executing anything
    pub dry_run: bool,
}

/// Result of a suite run
#[derive(Debug)]
pub struct SuiteResult {
    pub name: String,
    pub passed: bool,
    pub steps_run: usize,
    pub steps_total: usize,
    pub failure: Option<StepFailure>,
}

/// Diagnostics for the step that aborted the run
#[derive(Debug)]
pub struct StepFailure {
    /// 1-based position in the scenario table
    pub step: usize,
    pub error: Error,
}

/// A step after template expansion, ready to execute
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ResolvedStep {
    /// Concrete working directory, absent when the step keeps the
    /// directory the previous step ran in
    pub dir: Option<PathBuf>,
    /// Concrete command text
    pub cmd: String,
}

/// Resolve one step against the context
///
/// The directory, when present, is joined onto the fixed suite base
/// directory - never onto whatever directory a previous step resolved to,
/// so directory state cannot drift across steps.
pub fn resolve_step(step: &TestStep, context: &Context, base_dir: &Path) -> Result<ResolvedStep> {
    let cmd = template::resolve(&step.cmd, context)?;
    let dir = if step.dir.is_empty() {
        None
    } else {
        Some(base_dir.join(template::resolve(&step.dir, context)?))
    };
    Ok(ResolvedStep { dir, cmd })
}

/// Run a whole scenario, stopping at the first failure
///
/// Steps run strictly in declaration order, one child process at a time;
/// each is awaited to completion before the next is resolved.
pub async fn run_suite(
    scenario: &Scenario,
    context: &Context,
    base_dir: &Path,
    options: &RunOptions,
) -> SuiteResult {
    println!("{} {}", "Running:".blue().bold(), scenario.name.bold());
    if let Some(desc) = &scenario.description {
        println!("  {}", desc.dimmed());
    }

    let steps_total = scenario.steps.len();

    // The one piece of state carried between steps: a step without a
    // directory template runs wherever the last explicit directory pointed.
    let mut current_dir = base_dir.to_path_buf();

    for (i, step) in scenario.steps.iter().enumerate() {
        match execute_step(step, context, base_dir, &current_dir, options).await {
            Ok(next_dir) => current_dir = next_dir,
            Err(error) => {
                println!("{} step {} failed", "✗".red().bold(), i + 1);
                return SuiteResult {
                    name: scenario.name.clone(),
                    passed: false,
                    steps_run: i + 1,
                    steps_total,
                    failure: Some(StepFailure { step: i + 1, error }),
                };
            }
        }
    }

    println!("{} {}", "✓".green().bold(), "Suite passed".green().bold());
    SuiteResult {
        name: scenario.name.clone(),
        passed: true,
        steps_run: steps_total,
        steps_total,
        failure: None,
    }
}

/// Execute a single step and return the working directory for the next one
async fn execute_step(
    step: &TestStep,
    context: &Context,
    base_dir: &Path,
    current_dir: &Path,
    options: &RunOptions,
) -> Result<PathBuf> {
    let resolved = resolve_step(step, context, base_dir)?;
    let run_dir = match resolved.dir {
        Some(dir) => dir,
        None => current_dir.to_path_buf(),
    };

    if options.verbose {
        println!("{} {}", "in".dimmed(), run_dir.display().to_string().dimmed());
    }

    print!("{} ... ", resolved.cmd.trim());
    let _ = io::stdout().flush();

    if options.dry_run {
        println!("{}", "skipped (dry run)".yellow());
        return Ok(run_dir);
    }

    // In a dry run the directory may be one an earlier (skipped) step
    // would have created, so the check only applies to real runs.
    match std::fs::metadata(&run_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            println!("{}", "failed".red());
            return Err(Error::directory(&run_dir, "not a directory"));
        }
        Err(e) => {
            println!("{}", "failed".red());
            return Err(Error::directory(&run_dir, e.to_string()));
        }
    }

    tracing::debug!(dir = %run_dir.display(), "running step");
    let output = shell::run_shell_line(&resolved.cmd, &run_dir).await?;

    if !output.success() {
        println!("{}", "failed".red());
        return Err(Error::CommandFailed {
            command: resolved.cmd,
            code: output.code,
            output: output.stdout,
        });
    }

    println!("{}", "ok".green());
    Ok(run_dir)
}
