//! Wget tool runner wiring validation, compilation and process execution.

use std::path::PathBuf;

use crate::settings::WgetSettings;

use super::error::{RunError, ToolError};
use super::process::{ProcessRunner, ToolOutput};
use super::system::SystemProcessRunner;

/// Executable names probed on the search path, in order of preference.
pub const EXECUTABLE_NAMES: [&str; 2] = ["wget", "wget.exe"];

/// Runs the external wget tool from a [`WgetSettings`] record.
///
/// The runner validates the settings, compiles them into an argument list,
/// resolves the executable and delegates execution to the injected
/// [`ProcessRunner`]. A nonzero exit code is treated as a failure.
///
/// # Example
///
/// ```no_run
/// use url::Url;
/// use wget_run::settings::WgetSettings;
/// use wget_run::tool::WgetRunner;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = WgetSettings {
///     url: Some(Url::parse("https://example.com/archive.tar.gz")?),
///     quiet: true,
///     ..WgetSettings::default()
/// };
/// let output = WgetRunner::system().run(&settings)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WgetRunner<R = SystemProcessRunner> {
    runner: R,
}

impl WgetRunner {
    /// Creates a runner backed by the system process runner.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemProcessRunner::new())
    }
}

impl<R: ProcessRunner> WgetRunner<R> {
    /// Creates a runner that executes through the given collaborator.
    #[must_use]
    pub const fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Validates `settings`, compiles them and runs wget.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Settings`] when the validation gate rejects the
    /// settings, and [`RunError::Tool`] when the executable cannot be
    /// located, fails to start, or exits with a nonzero code. The gate runs
    /// before any process work: a rejected configuration never launches
    /// anything.
    pub fn run(&self, settings: &WgetSettings) -> Result<ToolOutput, RunError> {
        let arguments = settings.compile()?;
        let path = self.resolve(settings)?;

        tracing::debug!("Running {} {arguments}", path.display());

        let output = self.runner.execute(&path, &arguments)?;
        if !output.is_success() {
            return Err(ToolError::NonZeroExit {
                path,
                code: output.exit_code,
            }
            .into());
        }
        Ok(output)
    }

    /// Resolves the executable, preferring an explicit tool path override.
    fn resolve(&self, settings: &WgetSettings) -> Result<PathBuf, ToolError> {
        if let Some(path) = &settings.tool_path {
            if !path.exists() {
                return Err(ToolError::ToolPathNotFound { path: path.clone() });
            }
            return Ok(path.clone());
        }
        self.runner.locate(&EXECUTABLE_NAMES)
    }
}
