//! wget-run: typed settings and runner for the GNU Wget download tool.
//!
//! Build a [`WgetSettings`] record describing the download, compile it into
//! the exact command line wget expects, and run the tool through a
//! swappable process collaborator.
//!
//! ```no_run
//! use url::Url;
//! use wget_run::WgetSettings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = WgetSettings {
//!     url: Some(Url::parse("https://example.com/data.csv")?),
//!     output_document: Some("data.csv".into()),
//!     tries: 3,
//!     ..WgetSettings::default()
//! };
//! let output = wget_run::run(&settings)?;
//! println!("{}", output.stdout);
//! # Ok(())
//! # }
//! ```
//!
//! The argument list itself is available without running anything via
//! [`WgetSettings::compile`], and execution can be redirected through any
//! [`ProcessRunner`](tool::ProcessRunner) implementation via
//! [`WgetRunner::new`](tool::WgetRunner::new).

pub mod args;
pub mod settings;
pub mod tool;

pub use settings::{LimitRate, LimitRateUnit, SettingsError, WgetSettings};
pub use tool::{RunError, ToolOutput, WgetRunner};

/// Runs wget with the given settings using the system process runner.
///
/// Convenience entry point equivalent to
/// `WgetRunner::system().run(settings)`.
///
/// # Errors
///
/// See [`WgetRunner::run`](tool::WgetRunner::run).
pub fn run(settings: &WgetSettings) -> Result<ToolOutput, RunError> {
    WgetRunner::system().run(settings)
}
