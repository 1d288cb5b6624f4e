//! Error types for the smoke test runner
//!
//! Every category here is fatal to a run: the suite aborts at the first
//! occurrence and surfaces the failing step's diagnostics. There is no
//! partial-success notion and no step-level retry.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the smoke test runner
#[derive(Error, Debug)]
pub enum Error {
    // === Template Errors ===
    #[error("Malformed template {template:?}: {reason}")]
    Template { template: String, reason: String },

    #[error("Template references unknown field '{field}'")]
    Resolution { field: String },

    // === Execution Errors ===
    #[error("Cannot enter directory '{path}': {reason}")]
    Directory { path: String, reason: String },

    #[error("Command exited with code {code}:\n{command}\nOutput:\n{output}")]
    CommandFailed {
        command: String,
        code: i32,
        output: String,
    },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Invalid scenario file: {0}")]
    ScenarioParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a template parse error for a given template text
    pub fn template(template: &str, reason: impl Into<String>) -> Self {
        Self::Template {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a resolution error for an unknown context field
    pub fn resolution(field: &str) -> Self {
        Self::Resolution {
            field: field.to_string(),
        }
    }

    /// Create a directory error for a path that cannot be entered
    pub fn directory(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::Directory {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}
