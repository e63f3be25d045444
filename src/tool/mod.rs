//! Execution boundary for the external wget tool.
//!
//! This module provides:
//! - The collaborator trait for locating and launching executables
//!   ([`ProcessRunner`])
//! - The production implementation backed by the search path and
//!   `std::process` ([`SystemProcessRunner`])
//! - The orchestrating runner ([`WgetRunner`])
//! - Captured process results ([`ToolOutput`])
//! - Error types ([`ToolError`], [`RunError`])
//!
//! The core never parses wget's output; stdout and stderr are captured and
//! handed back to the caller untouched.

mod error;
mod process;
mod runner;
mod system;

#[cfg(test)]
mod system_tests;

pub use error::{RunError, ToolError};
pub use process::{ProcessRunner, ToolOutput};
pub use runner::{EXECUTABLE_NAMES, WgetRunner};
pub use system::SystemProcessRunner;
