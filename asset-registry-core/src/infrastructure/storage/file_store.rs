//! Filesystem-backed record store

use std::fs;
use std::path::Path;

use crate::domain::repositories::RecordStore;
use crate::shared::error::RegistryError;

/// Record store over the local filesystem.
///
/// Writes truncate and rewrite the target file; a crash mid-write can leave it partial.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl RecordStore for FileStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>, RegistryError> {
        fs::read(path).map_err(|e| RegistryError::not_found_or_unreadable(path, e))
    }

    fn write(&self, path: &Path, data: &[u8]) -> Result<(), RegistryError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RegistryError::write_failure(path, e))?;
        }
        fs::write(path, data).map_err(|e| RegistryError::write_failure(path, e))?;
        log::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
