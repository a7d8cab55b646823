//! Record store repository
//!
//! Whole-document load and save. Implementations rewrite a document in full on
//! every write; there is no partial update.

use std::path::Path;

use crate::shared::error::RegistryError;

/// Record store trait
pub trait RecordStore {
    /// Read the whole document at `path`
    fn read(&self, path: &Path) -> Result<Vec<u8>, RegistryError>;

    /// Replace the document at `path`, creating missing parent directories
    fn write(&self, path: &Path, data: &[u8]) -> Result<(), RegistryError>;

    /// Check if a document exists
    fn exists(&self, path: &Path) -> bool;
}
