//! Scenario suite: step definitions, the built-in workflow, and the runner
//!
//! A suite is an ordered table of shell steps with templated working
//! directories and command text. The runner resolves each step against the
//! run context and stops the whole suite at the first failure.

mod config;
mod runner;
mod shell;
mod workflow;

pub use config::{Scenario, TestStep};
pub use runner::{resolve_step, run_suite, ResolvedStep, RunOptions, StepFailure, SuiteResult};
pub use shell::{run_shell_line, ShellOutput};
pub use workflow::default_scenario;
