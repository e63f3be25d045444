//! Process execution boundary: output type and collaborator trait.

use std::path::{Path, PathBuf};

use crate::args::ArgumentList;

use super::ToolError;

/// Captured result of a finished tool process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Process exit code; `0` means success.
    pub exit_code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl ToolOutput {
    /// Returns true if the process exited successfully.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Abstraction over locating and executing an external tool.
///
/// Production code uses [`SystemProcessRunner`](super::SystemProcessRunner);
/// tests substitute a mock to capture the exact invocation without spawning
/// anything.
pub trait ProcessRunner {
    /// Resolves the first of `names` found on the search path.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::NotFound`] when no candidate resolves.
    fn locate(&self, names: &[&str]) -> Result<PathBuf, ToolError>;

    /// Launches `path` with `arguments` and waits for it to finish.
    ///
    /// Implementations receive the structured argument list rather than bare
    /// strings so their logging path can use the redacting renderer while
    /// the child process gets the literal tokens.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Launch`] when the process cannot be spawned or
    /// waited on.
    fn execute(&self, path: &Path, arguments: &ArgumentList) -> Result<ToolOutput, ToolError>;
}
