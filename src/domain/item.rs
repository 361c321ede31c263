use super::selection::Selection;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Price and remaining stock for one selection.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct Item {
    pub price: Decimal,
    pub quantity: u32,
}

/// Stocked selections. Absent keys were never stocked.
pub type Inventory = HashMap<Selection, Item>;

impl Item {
    pub fn new(price: Decimal, quantity: u32) -> Self {
        Self { price, quantity }
    }

    /// Price of `quantity` units of this item, or `None` when the total
    /// does not fit in a `Decimal`.
    pub fn total_price(&self, quantity: u32) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(quantity))
    }
}
