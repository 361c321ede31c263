use crate::domain::item::{Inventory, Item};
use crate::domain::ports::{InventorySource, SeedDocument};
use crate::domain::selection::Selection;
use crate::error::InventoryError;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tracing::{info, warn};

/// Fetches the seed document from `source` and decodes it.
pub async fn load_inventory(source: &dyn InventorySource) -> Result<Inventory, InventoryError> {
    let document = source.document().await?;
    let inventory = decode_inventory(&document)?;
    info!(stocked = inventory.len(), "inventory loaded");
    Ok(inventory)
}

/// Converts a raw seed document into a typed inventory.
///
/// Records that are not `{price, quantity}` objects are skipped with a
/// warning. A well-formed record under a key that is not a [`Selection`]
/// fails the whole load.
pub fn decode_inventory(document: &SeedDocument) -> Result<Inventory, InventoryError> {
    let mut inventory = Inventory::new();
    for (key, value) in document {
        let Some(item) = decode_item(value) else {
            warn!(key = %key, "skipping malformed inventory record");
            continue;
        };
        let selection = Selection::from_str(key)?;
        inventory.insert(selection, item);
    }
    Ok(inventory)
}

fn decode_item(value: &Value) -> Option<Item> {
    let record = value.as_object()?;
    let price = record.get("price").and_then(decode_price)?;
    let quantity = record
        .get("quantity")?
        .as_u64()
        .and_then(|q| u32::try_from(q).ok())?;
    Some(Item::new(price, quantity))
}

fn decode_price(value: &Value) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    let text = number.to_string();
    let price = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()?;
    (price >= Decimal::ZERO).then_some(price)
}
