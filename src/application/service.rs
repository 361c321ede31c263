use crate::domain::command::{Command, CommandType};
use crate::domain::item::Item;
use crate::domain::machine::VendingMachine;
use crate::domain::selection::Selection;
use crate::error::{Error, Result, VendingMachineError};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handle to a single vending machine.
///
/// Every operation takes the machine's lock for its whole duration, so two
/// concurrent vends of the same selection can never both pass the stock check
/// before either one decrements it. Clones share the same machine.
#[derive(Clone)]
pub struct VendingService {
    machine: Arc<Mutex<VendingMachine>>,
}

impl VendingService {
    pub fn new(machine: VendingMachine) -> Self {
        Self {
            machine: Arc::new(Mutex::new(machine)),
        }
    }

    pub async fn deposit(&self, amount: Decimal) -> std::result::Result<(), VendingMachineError> {
        self.machine.lock().await.deposit_decimal(amount)
    }

    pub async fn vend(
        &self,
        selection: Selection,
        quantity: u32,
    ) -> std::result::Result<(), VendingMachineError> {
        self.machine.lock().await.vend(selection, quantity)
    }

    pub async fn item(&self, selection: Selection) -> Option<Item> {
        self.machine.lock().await.item(selection).copied()
    }

    /// A copy of the machine's current state.
    pub async fn snapshot(&self) -> VendingMachine {
        self.machine.lock().await.clone()
    }

    /// Applies one scripted command to the machine.
    pub async fn process_command(&self, command: Command) -> Result<()> {
        match command.r#type {
            CommandType::Deposit => {
                let amount = command
                    .amount
                    .ok_or_else(|| Error::Command("Deposit missing amount".to_string()))?;
                self.deposit(amount).await?;
            }
            CommandType::Vend => {
                let selection = command
                    .selection
                    .ok_or_else(|| Error::Command("Vend missing selection".to_string()))?;
                self.vend(selection, command.quantity.unwrap_or(1)).await?;
            }
        }
        Ok(())
    }
}
