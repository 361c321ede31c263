//! Runtime configuration for a vending machine.

use crate::domain::money::{Amount, Balance};

/// Settings applied when a machine is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MachineConfig {
    initial_balance: Balance,
}

impl MachineConfig {
    /// Sets the balance the machine starts with before any deposit.
    pub fn with_initial_balance(mut self, amount: Amount) -> Self {
        self.initial_balance = amount.into();
        self
    }

    pub fn initial_balance(&self) -> Balance {
        self.initial_balance
    }
}
