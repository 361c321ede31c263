use crate::error::VendingMachineError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::{Sub, SubAssign};

/// A monetary value held by the machine.
///
/// Wraps `rust_decimal::Decimal` so balance arithmetic stays exact.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// A validated deposit amount. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, VendingMachineError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(VendingMachineError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = VendingMachineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Balance {
    fn from(amount: Amount) -> Self {
        Self(amount.0)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Adds a deposit, or `None` when the sum leaves `Decimal`'s range.
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Self)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balance_arithmetic() {
        let b1 = Balance::new(dec!(10.0));
        let b2 = Balance::new(dec!(4.50));
        assert_eq!(b1 - b2, Balance::new(dec!(5.5)));

        let mut b3 = b1;
        b3 -= b2;
        assert_eq!(b3, Balance::new(dec!(5.5)));
    }

    #[test]
    fn test_checked_add() {
        let deposit = Amount::new(dec!(4.50)).unwrap();
        assert_eq!(
            Balance::new(dec!(10.0)).checked_add(deposit),
            Some(Balance::new(dec!(14.5)))
        );
        assert_eq!(Balance::new(Decimal::MAX).checked_add(deposit), None);
        assert_eq!(
            Balance::new(Decimal::MAX).checked_add(Amount::new(Decimal::ZERO).unwrap()),
            Some(Balance::new(Decimal::MAX))
        );
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.25)).is_ok());
        assert!(Amount::new(dec!(0)).is_ok());
        assert_eq!(
            Amount::new(dec!(-0.01)),
            Err(VendingMachineError::InvalidAmount(dec!(-0.01)))
        );
    }

    #[test]
    fn test_amount_into_balance() {
        let amount: Amount = dec!(2.00).try_into().unwrap();
        assert_eq!(Balance::from(amount), Balance::new(dec!(2)));
    }
}
