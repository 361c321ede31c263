use super::in_memory::parse_document;
use crate::domain::ports::{InventorySource, SeedDocument};
use crate::error::InventoryError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads the seed document from a JSON file on disk.
///
/// The file is read on every call to [`InventorySource::document`]; nothing
/// is cached and nothing is ever written back.
#[derive(Debug, Clone)]
pub struct FileInventorySource {
    path: PathBuf,
}

impl FileInventorySource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InventorySource for FileInventorySource {
    async fn document(&self) -> Result<SeedDocument, InventoryError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            InventoryError::InvalidResource(format!("{}: {}", self.path.display(), e))
        })?;
        parse_document(&bytes)
    }
}
