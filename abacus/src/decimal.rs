//! Arbitrary-precision decimal results

use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::Zero;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A decimal value in canonical form
///
/// Trailing fractional zeros are always stripped, and `Display` renders plain
/// positional notation (`0.000000000000000000033`, never `3.3E-20`), so the
/// text of a result can be fed back into the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

impl Decimal {
    pub fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn into_big_decimal(self) -> BigDecimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self(value.normalized())
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from(BigDecimal::from(value))
    }
}

impl FromStr for Decimal {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s).map(Self::from)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_plain_string())
    }
}

/// Serialized as a plain string so no digits are lost in JSON
impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
