//! Command-line argument tokens and ordered argument lists.
//!
//! This module provides:
//! - Single argument tokens with kind-dependent rendering ([`Argument`])
//! - Ordered, append-only argument collections ([`ArgumentList`])
//! - The switch/value separator ([`SWITCH_SEPARATOR`])
//! - The placeholder substituted for secret values in log output
//!   ([`REDACTED`])
//!
//! # Rendering
//!
//! Every token has two renderings: [`Argument::render`] produces the literal
//! text handed to the child process, while [`Argument::render_safe`] masks
//! values marked secret (passwords). `Display` on both types delegates to the
//! safe rendering, so an argument list interpolated into a log line never
//! leaks credentials.

mod argument;
mod list;


pub use argument::{Argument, REDACTED, SWITCH_SEPARATOR};
pub use list::ArgumentList;
