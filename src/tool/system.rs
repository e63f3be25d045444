//! Production process runner backed by the system search path.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::args::ArgumentList;

use super::ToolError;
use super::process::{ProcessRunner, ToolOutput};

/// Process runner that searches `PATH` and spawns real processes.
///
/// [`locate`](ProcessRunner::locate) probes each candidate name with the
/// `which` crate and returns the first hit.
/// [`execute`](ProcessRunner::execute) runs the resolved executable with
/// piped output and waits for it to finish; it reports the exit code as-is
/// and leaves the success policy to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    /// Creates a new system process runner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn locate(&self, names: &[&str]) -> Result<PathBuf, ToolError> {
        for name in names {
            if let Ok(path) = which::which(name) {
                tracing::debug!("Resolved '{name}' to {}", path.display());
                return Ok(path);
            }
        }
        Err(ToolError::NotFound {
            candidates: names.iter().map(ToString::to_string).collect(),
        })
    }

    fn execute(&self, path: &Path, arguments: &ArgumentList) -> Result<ToolOutput, ToolError> {
        tracing::debug!("Executing: {} {arguments}", path.display());

        let output = Command::new(path)
            .args(arguments.render())
            .output()
            .map_err(|source| ToolError::Launch {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(ToolOutput {
            // A process killed by a signal has no exit code
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
