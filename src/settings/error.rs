//! Error types for settings construction and validation.

use thiserror::Error;

/// Error type for building and compiling [`WgetSettings`](super::WgetSettings).
///
/// Construction errors surface at value-construction time, validation errors
/// before any argument is emitted. Nothing is caught or downgraded
/// internally.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A rate limit was constructed with a negative magnitude.
    #[error("Limit rate must be a non-negative number, got {value}")]
    NegativeLimitRate {
        /// The rejected magnitude.
        value: f64,
    },

    /// Neither the download URL nor an input file was provided.
    #[error("At least one of 'url' and 'input_file' must be set")]
    MissingInput,
}
