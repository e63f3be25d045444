//! Single command-line argument tokens.

use std::fmt;

/// Separator between a switch name and its value.
pub const SWITCH_SEPARATOR: &str = "=";

/// Replacement text used when a secret value is rendered for log output.
pub const REDACTED: &str = "[REDACTED]";

/// A single token of a wget command line.
///
/// The rendering rules follow wget's argument grammar: boolean switches are
/// bare tokens, string-valued switches carry a double-quoted value, and
/// numeric-valued switches carry their value unquoted. Quoting depends on the
/// kind of the value, never on its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A bare switch with no value, e.g. `--quiet`.
    Flag(&'static str),

    /// A bare value with no switch prefix (the download URL).
    Positional(String),

    /// A `name=value` pair with the value left unquoted.
    Pair {
        /// Switch name including the leading dashes.
        name: &'static str,
        /// Rendered value.
        value: String,
    },

    /// A `name="value"` pair with the value wrapped in double quotes.
    QuotedPair {
        /// Switch name including the leading dashes.
        name: &'static str,
        /// Rendered value, without the surrounding quotes.
        value: String,
        /// Masked by [`Argument::render_safe`] when true.
        secret: bool,
    },
}

impl Argument {
    /// Renders the literal token handed to the process.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Flag(name) => (*name).to_string(),
            Self::Positional(value) => value.clone(),
            Self::Pair { name, value } => format!("{name}{SWITCH_SEPARATOR}{value}"),
            Self::QuotedPair { name, value, .. } => {
                format!("{name}{SWITCH_SEPARATOR}\"{value}\"")
            }
        }
    }

    /// Renders the token for log output, masking secret values.
    #[must_use]
    pub fn render_safe(&self) -> String {
        match self {
            Self::QuotedPair {
                name, secret: true, ..
            } => format!("{name}{SWITCH_SEPARATOR}\"{REDACTED}\""),
            _ => self.render(),
        }
    }

    /// Returns true if the token carries a value that must not be logged.
    #[must_use]
    pub const fn is_secret(&self) -> bool {
        matches!(self, Self::QuotedPair { secret: true, .. })
    }
}

impl fmt::Display for Argument {
    /// Displays the safe rendering, so arguments dropped into log lines
    /// cannot leak secrets.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}
