//! Shell invocation boundary
//!
//! Resolved command text is handed to `sh -c` as a single argument; steps
//! are shell snippets and may rely on pipes, `&&`, `||` and redirection.
//! This is the only place that spawns processes, and command text is opaque
//! here - nothing in the runner parses it.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::common::Result;

/// Exit status and captured stdout of one shell line
#[derive(Debug)]
pub struct ShellOutput {
    /// Child exit code; termination by signal maps to -1
    pub code: i32,
    pub stdout: String,
}

impl ShellOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run one line of shell in `cwd`, blocking until it exits
///
/// Stdout is captured for the caller; stderr stays attached to the
/// runner's own stderr.
pub async fn run_shell_line(line: &str, cwd: &Path) -> Result<ShellOutput> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(line)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .await?;

    Ok(ShellOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
    })
}
