//! Stock quantity value object.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::value_object::ValueObject;

/// A non-negative number of units.
///
/// Callers hand quantities in as signed integers; conversion is where negative
/// input is rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl ValueObject for Quantity {}

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(units: u64) -> Self {
        Self(units)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Quantity) -> LedgerResult<Quantity> {
        self.0
            .checked_add(other.0)
            .map(Quantity)
            .ok_or_else(|| LedgerError::invalid_input("quantity overflow"))
    }

    /// Subtract, or `None` when `other` exceeds `self`.
    pub fn checked_sub(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_sub(other.0).map(Quantity)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value).map(Quantity).map_err(|_| {
            LedgerError::invalid_input(format!("quantity must be non-negative, got {value}"))
        })
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Quantity> for u64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn negative_input_is_rejected() {
        let err = Quantity::try_from(-1i64).unwrap_err();
        match err {
            LedgerError::InvalidInput(msg) if msg.contains("-1") => {}
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn unsigned_input_converts_without_range_check() {
        assert_eq!(Quantity::from(u64::MAX).get(), u64::MAX);
        assert_eq!(Quantity::try_from(7u64).unwrap(), Quantity::new(7));
    }

    #[test]
    fn zero_is_accepted() {
        assert_eq!(Quantity::try_from(0i64).unwrap(), Quantity::ZERO);
        assert!(Quantity::ZERO.is_zero());
    }

    #[test]
    fn addition_overflow_is_invalid_input() {
        let err = Quantity::new(u64::MAX).checked_add(Quantity::new(1)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidInput(_)));
    }

    #[test]
    fn subtraction_below_zero_yields_none() {
        assert_eq!(Quantity::new(3).checked_sub(Quantity::new(4)), None);
        assert_eq!(Quantity::new(4).checked_sub(Quantity::new(4)), Some(Quantity::ZERO));
    }

    proptest! {
        #[test]
        fn every_non_negative_i64_converts_unchanged(n in 0i64..=i64::MAX) {
            prop_assert_eq!(Quantity::try_from(n).unwrap().get(), n as u64);
        }

        #[test]
        fn every_negative_i64_is_rejected(n in i64::MIN..0i64) {
            prop_assert!(Quantity::try_from(n).is_err());
        }
    }
}
