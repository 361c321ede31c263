use crate::domain::ports::{InventorySource, SeedDocument};
use crate::error::InventoryError;
use async_trait::async_trait;
use serde_json::Value;

/// Parses raw seed bytes into a document.
///
/// Anything other than a JSON object is a conversion failure.
pub fn parse_document(bytes: &[u8]) -> Result<SeedDocument, InventoryError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| InventoryError::ConversionFailure(e.to_string()))?;
    match value {
        Value::Object(document) => Ok(document),
        other => Err(InventoryError::ConversionFailure(format!(
            "expected an object at the top level, found {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A seed held in memory, either as raw bytes or as a parsed document.
#[derive(Debug, Clone)]
pub enum InMemoryInventorySource {
    Bytes(Vec<u8>),
    Document(SeedDocument),
}

impl InMemoryInventorySource {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }

    pub fn from_document(document: SeedDocument) -> Self {
        Self::Document(document)
    }
}

#[async_trait]
impl InventorySource for InMemoryInventorySource {
    async fn document(&self) -> Result<SeedDocument, InventoryError> {
        match self {
            Self::Bytes(bytes) => parse_document(bytes),
            Self::Document(document) => Ok(document.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_bytes_source() {
        let source = InMemoryInventorySource::from_bytes(br#"{"soda": {}}"#.to_vec());
        let document = source.document().await.unwrap();
        assert!(document.contains_key("soda"));
    }

    #[tokio::test]
    async fn test_document_source() {
        let document = json!({ "gum": { "price": 0.5, "quantity": 1 } })
            .as_object()
            .unwrap()
            .clone();
        let source = InMemoryInventorySource::from_document(document.clone());
        assert_eq!(source.document().await.unwrap(), document);
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(matches!(
            parse_document(b"\"soda\""),
            Err(InventoryError::ConversionFailure(msg)) if msg.contains("a string")
        ));
        assert!(matches!(
            parse_document(b"{ not json"),
            Err(InventoryError::ConversionFailure(_))
        ));
    }
}
