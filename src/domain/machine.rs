use super::item::{Inventory, Item};
use super::money::{Amount, Balance};
use super::selection::Selection;
use crate::config::MachineConfig;
use crate::error::VendingMachineError;
use rust_decimal::Decimal;
use tracing::debug;

/// A single vending machine: its stock and the money deposited so far.
///
/// State changes only through [`VendingMachine::deposit`] and successful
/// calls to [`VendingMachine::vend`]. A failed vend leaves both the balance
/// and every item untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct VendingMachine {
    inventory: Inventory,
    amount_deposited: Balance,
}

impl VendingMachine {
    /// Creates a machine with an empty balance.
    pub fn new(inventory: Inventory) -> Self {
        Self::with_config(inventory, &MachineConfig::default())
    }

    pub fn with_config(inventory: Inventory, config: &MachineConfig) -> Self {
        Self {
            inventory,
            amount_deposited: config.initial_balance(),
        }
    }

    /// The full menu, stocked or not.
    pub fn selection(&self) -> &'static [Selection] {
        &Selection::ALL
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn amount_deposited(&self) -> Balance {
        self.amount_deposited
    }

    pub fn item(&self, selection: Selection) -> Option<&Item> {
        self.inventory.get(&selection)
    }

    /// Adds `amount` to the balance. A deposit that would overflow the
    /// balance is refused and the balance is left as it was.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), VendingMachineError> {
        self.amount_deposited = self
            .amount_deposited
            .checked_add(amount)
            .ok_or(VendingMachineError::BalanceOverflow(amount.value()))?;
        debug!(amount = %amount.value(), balance = %self.amount_deposited.value(), "deposit accepted");
        Ok(())
    }

    /// Validates `amount` and deposits it. Negative amounts are rejected.
    pub fn deposit_decimal(&mut self, amount: Decimal) -> Result<(), VendingMachineError> {
        self.deposit(Amount::new(amount)?)
    }

    /// Dispenses `quantity` units of `selection`.
    ///
    /// Checks run in a fixed order and the first failure wins: the selection
    /// must be stocked, enough units must remain, and the deposited balance
    /// must cover the total price. On `InsufficientFunds` the error carries
    /// the exact shortfall.
    pub fn vend(&mut self, selection: Selection, quantity: u32) -> Result<(), VendingMachineError> {
        if quantity == 0 {
            return Err(VendingMachineError::InvalidQuantity(quantity));
        }

        let item = self
            .inventory
            .get_mut(&selection)
            .ok_or(VendingMachineError::InvalidSelection)?;

        if item.quantity < quantity {
            return Err(VendingMachineError::OutOfStock);
        }

        let total_price = item
            .total_price(quantity)
            .map(Balance::new)
            .ok_or(VendingMachineError::PriceOverflow { quantity })?;
        if self.amount_deposited < total_price {
            return Err(VendingMachineError::InsufficientFunds {
                required: (total_price - self.amount_deposited).value(),
            });
        }

        self.amount_deposited -= total_price;
        item.quantity -= quantity;
        debug!(
            %selection,
            quantity,
            remaining = item.quantity,
            balance = %self.amount_deposited.value(),
            "vend completed"
        );
        Ok(())
    }
}
