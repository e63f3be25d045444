//! Typed wget configuration and its argument compiler.
//!
//! This module provides:
//! - The configuration record ([`WgetSettings`])
//! - The switch table binding fields to option tokens ([`Switch`])
//! - The composite rate-limit value ([`LimitRate`], [`LimitRateUnit`])
//! - Validation and compilation errors ([`SettingsError`])
//!
//! # Compilation
//!
//! [`WgetSettings::compile`] walks the fields in the fixed order of
//! [`Switch::ALL`] and emits one token per set field:
//!
//! | field kind | included when | emitted as |
//! |---|---|---|
//! | boolean switch | `true` | bare switch token |
//! | download URL | `Some` | positional URL string |
//! | string option | non-blank after trim | `name="value"` |
//! | unsigned integer | nonzero | `name=value` |
//! | duration | `Some` | `name=seconds` (fractional) |
//! | rate limit | `Some` and magnitude > 0 | `name=` + [`LimitRate::format`] |
//!
//! Passwords compile like ordinary string options but are marked secret, so
//! log renderings mask them.

mod compile;
mod error;
mod limit_rate;
mod options;
mod switch;


pub use error::SettingsError;
pub use limit_rate::{LimitRate, LimitRateUnit};
pub use options::WgetSettings;
pub use switch::Switch;
