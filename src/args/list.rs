//! Ordered collections of command-line arguments.

use std::fmt;

use super::Argument;

/// Ordered list of command-line arguments.
///
/// Append-only; the insertion order is exactly the order the tokens are
/// handed to the process. Compiling the same settings twice produces two
/// equal lists, so the list itself is the testable contract of the crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    arguments: Vec<Argument>,
}

impl ArgumentList {
    /// Creates an empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arguments: Vec::new(),
        }
    }

    /// Appends an already-built argument.
    pub fn push(&mut self, argument: Argument) {
        self.arguments.push(argument);
    }

    /// Appends a bare switch token, e.g. `--quiet`.
    pub fn push_flag(&mut self, name: &'static str) {
        self.push(Argument::Flag(name));
    }

    /// Appends a positional value with no switch prefix.
    pub fn push_positional(&mut self, value: impl Into<String>) {
        self.push(Argument::Positional(value.into()));
    }

    /// Appends a `name=value` pair with the value left unquoted.
    pub fn push_pair(&mut self, name: &'static str, value: impl Into<String>) {
        self.push(Argument::Pair {
            name,
            value: value.into(),
        });
    }

    /// Appends a `name="value"` pair with the value quoted.
    pub fn push_quoted(&mut self, name: &'static str, value: impl Into<String>) {
        self.push(Argument::QuotedPair {
            name,
            value: value.into(),
            secret: false,
        });
    }

    /// Appends a quoted pair whose value is masked in log output.
    pub fn push_secret(&mut self, name: &'static str, value: impl Into<String>) {
        self.push(Argument::QuotedPair {
            name,
            value: value.into(),
            secret: true,
        });
    }

    /// Renders the literal tokens handed to the process, in order.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.arguments.iter().map(Argument::render).collect()
    }

    /// Renders a single space-joined line for log output, masking secrets.
    #[must_use]
    pub fn render_safe(&self) -> String {
        self.arguments
            .iter()
            .map(Argument::render_safe)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns an iterator over the arguments in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns true if no argument has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

impl fmt::Display for ArgumentList {
    /// Displays the safe rendering; see [`ArgumentList::render_safe`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_safe())
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
