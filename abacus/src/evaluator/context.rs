//! Numeric context applied to every arithmetic step

use bigdecimal::{BigDecimal, RoundingMode};
use std::num::NonZeroU64;

/// Significant digits used when no precision is given
pub const DEFAULT_PRECISION: u64 = 20;

/// Decimal division is carried out to this many digits before rounding
pub const MAX_PRECISION: u64 = 100;

/// Precision and rounding policy for decimal arithmetic
///
/// Every intermediate result is rounded to `precision` significant digits.
/// The default is 20 digits, rounding half away from zero (round-half-up).
/// Magnitude is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericContext {
    precision: NonZeroU64,
    rounding: RoundingMode,
}

impl Default for NumericContext {
    fn default() -> Self {
        Self::with_precision(DEFAULT_PRECISION)
    }
}

impl NumericContext {
    /// Precision is clamped to `1..=MAX_PRECISION`
    pub fn new(precision: u64, rounding: RoundingMode) -> Self {
        let precision =
            NonZeroU64::new(precision.clamp(1, MAX_PRECISION)).unwrap_or(NonZeroU64::MIN);
        Self {
            precision,
            rounding,
        }
    }

    pub fn with_precision(precision: u64) -> Self {
        Self::new(precision, RoundingMode::HalfUp)
    }

    pub fn precision(&self) -> u64 {
        self.precision.get()
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Round to the context's significant digits
    ///
    /// Values that already fit are returned as they are, without padding.
    pub fn round(&self, value: BigDecimal) -> BigDecimal {
        if value.digits() <= self.precision.get() {
            return value;
        }
        value.with_precision_round(self.precision, self.rounding)
    }
}
