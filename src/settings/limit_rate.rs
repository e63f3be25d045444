//! Download rate limit value for the `--limit-rate` switch.

use super::error::SettingsError;

/// Unit of a [`LimitRate`] magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LimitRateUnit {
    /// Magnitude is in bytes per second, emitted without a suffix.
    #[default]
    None,
    /// Magnitude is in kilobytes per second, emitted with a `k` suffix.
    Kilobytes,
    /// Magnitude is in megabytes per second, emitted with an `m` suffix.
    Megabytes,
}

/// Download speed limit passed to wget via `--limit-rate`.
///
/// The magnitude must be non-negative, enforced at construction. Zero is
/// legal and means the limit is left out when the settings are compiled.
///
/// # Example
///
/// ```
/// use wget_run::settings::{LimitRate, LimitRateUnit};
///
/// let rate = LimitRate::with_unit(300.0, LimitRateUnit::Kilobytes).unwrap();
/// assert_eq!(rate.format(), "300k");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitRate {
    value: f64,
    unit: LimitRateUnit,
}

impl LimitRate {
    /// Creates a limit in bytes per second.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NegativeLimitRate`] if `value` is negative.
    pub fn new(value: f64) -> Result<Self, SettingsError> {
        Self::with_unit(value, LimitRateUnit::None)
    }

    /// Creates a limit with an explicit unit.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NegativeLimitRate`] if `value` is negative.
    pub fn with_unit(value: f64, unit: LimitRateUnit) -> Result<Self, SettingsError> {
        if value < 0.0 {
            return Err(SettingsError::NegativeLimitRate { value });
        }
        Ok(Self { value, unit })
    }

    /// Returns the magnitude.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the unit.
    #[must_use]
    pub const fn unit(&self) -> LimitRateUnit {
        self.unit
    }

    /// Formats the value the way wget expects it on the command line.
    ///
    /// The magnitude uses the shortest decimal representation that
    /// round-trips (`2.6` → `"2.6"`, `300.0` → `"300"`), with `.` as the
    /// decimal point and no grouping. The match carries no wildcard arm: a
    /// unit variant without a format rule must not compile.
    #[must_use]
    pub fn format(&self) -> String {
        match self.unit {
            LimitRateUnit::None => self.value.to_string(),
            LimitRateUnit::Kilobytes => format!("{}k", self.value),
            LimitRateUnit::Megabytes => format!("{}m", self.value),
        }
    }
}
