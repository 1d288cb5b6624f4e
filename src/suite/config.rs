//! Scenario definitions
//!
//! Defines the data structures for scenario tables and for deserializing
//! YAML scenario files.

use serde::Deserialize;
use std::path::Path;

use crate::common::{Error, Result};

/// A complete scenario: an ordered table of test steps
///
/// Order is semantically significant - the steps encode a workflow with
/// real dependencies (a key must exist before it can be added, an app must
/// be created before it is pushed). Steps are never reordered or deduped.
#[derive(Deserialize, Debug)]
pub struct Scenario {
    /// Name of the scenario
    pub name: String,
    /// Optional description of the workflow the steps exercise
    pub description: Option<String>,
    /// The sequence of steps to execute
    pub steps: Vec<TestStep>,
}

/// One step of a scenario
///
/// A relative directory plus a command that is expected to exit 0. The
/// command is run as an argument to `sh -c`, so it can be arbitrarily
/// complex shell text. Both fields are templates resolved against the run
/// context.
#[derive(Deserialize, Debug, Clone)]
pub struct TestStep {
    /// Working directory template, relative to the suite base directory.
    /// Empty means "stay wherever the previous step left off".
    #[serde(default)]
    pub dir: String,
    /// Command template
    pub cmd: String,
}

impl TestStep {
    pub fn new(dir: &str, cmd: &str) -> Self {
        Self {
            dir: dir.to_string(),
            cmd: cmd.to_string(),
        }
    }
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let scenario: Scenario =
            serde_yaml::from_str(&content).map_err(|e| Error::ScenarioParse(e.to_string()))?;

        if scenario.steps.is_empty() {
            return Err(Error::ScenarioParse(format!(
                "scenario '{}' has no steps",
                scenario.name
            )));
        }

        Ok(scenario)
    }
}
