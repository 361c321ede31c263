use crate::error::InventoryError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A loosely-typed seed document: selection keys mapped to raw records.
pub type SeedDocument = Map<String, Value>;

/// Where a machine's starting inventory comes from.
///
/// Implementations only locate and parse the resource; turning the document
/// into typed items is the loader's job.
#[async_trait]
pub trait InventorySource: Send + Sync {
    async fn document(&self) -> Result<SeedDocument, InventoryError>;
}

pub type InventorySourceBox = Box<dyn InventorySource>;
