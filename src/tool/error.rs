//! Error types for tool location and execution.

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::SettingsError;

/// Error type for locating and running the external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// No candidate executable name resolved on the search path.
    #[error("Could not locate executable (tried {candidates:?})")]
    NotFound {
        /// The executable names that were searched for.
        candidates: Vec<String>,
    },

    /// An explicit tool path was configured but does not exist.
    #[error("Configured tool path '{}' does not exist", path.display())]
    ToolPathNotFound {
        /// The configured path.
        path: PathBuf,
    },

    /// The process could not be spawned or waited on.
    #[error("Failed to run '{}': {source}", path.display())]
    Launch {
        /// Path to the executable.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The process finished with a nonzero exit code.
    #[error("Process '{}' exited with code {code}", path.display())]
    NonZeroExit {
        /// Path to the executable.
        path: PathBuf,
        /// The nonzero exit code.
        code: i32,
    },
}

/// Error type returned by [`WgetRunner::run`](super::WgetRunner::run).
///
/// Wraps the two failure domains without altering them: settings problems
/// surface before any process work starts, tool problems afterwards.
#[derive(Debug, Error)]
pub enum RunError {
    /// The settings failed validation.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The tool could not be located or executed.
    #[error(transparent)]
    Tool(#[from] ToolError),
}
