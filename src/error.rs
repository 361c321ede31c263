use rust_decimal::Decimal;
use thiserror::Error;

/// Failures while turning a seed document into a typed inventory.
///
/// Every variant is fatal to the load: callers must not keep a partially
/// decoded inventory around after one of these.
#[derive(Error, Debug, PartialEq)]
pub enum InventoryError {
    #[error("Invalid resource: {0}")]
    InvalidResource(String),
    #[error("Conversion failure: {0}")]
    ConversionFailure(String),
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

/// Failures of a single deposit or vend. The machine is left untouched.
#[derive(Error, Debug, PartialEq)]
pub enum VendingMachineError {
    #[error("Invalid selection")]
    InvalidSelection,
    #[error("Out of stock")]
    OutOfStock,
    #[error("Insufficient funds: {required} more required")]
    InsufficientFunds { required: Decimal },
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Price overflow: {quantity} units cost more than can be represented")]
    PriceOverflow { quantity: u32 },
    #[error("Balance overflow: depositing {0} exceeds the maximum balance")]
    BalanceOverflow(Decimal),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    VendingMachine(#[from] VendingMachineError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Command error: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, Error>;
