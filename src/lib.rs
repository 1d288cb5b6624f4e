//! End-to-end smoke tests for a Deis deployment workflow
//!
//! The runner walks an ordered scenario of shell steps — SSH key setup, CLI
//! registration and login, `git push`, HTTP checks — resolving `{{.Field}}`
//! templates against the run configuration and aborting the whole suite on
//! the first failing step.

pub mod cli;
pub mod commands;
pub mod common;
pub mod suite;
pub mod template;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use suite::{Scenario, TestStep};
