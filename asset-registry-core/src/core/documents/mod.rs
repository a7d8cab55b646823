//! Supporting documents
//!
//! Copies a whitepaper or similar file into an existing asset directory.
//! Every precondition is checked before the destination is created.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::domain::AssetId;
use crate::infrastructure::paths::PathResolver;
use crate::shared::constants::ALLOWED_DOCUMENT_EXTENSIONS;
use crate::shared::error::RegistryError;

pub struct DocumentAttacher<'a> {
    paths: &'a PathResolver,
}

impl<'a> DocumentAttacher<'a> {
    pub fn new(paths: &'a PathResolver) -> Self {
        Self { paths }
    }

    /// Copy `document_path` into the asset directory of `asset_id` under its own file name.
    ///
    /// Returns the destination path. An existing destination is never overwritten.
    pub fn attach_document(&self, asset_id: &str, document_path: &Path) -> Result<PathBuf, RegistryError> {
        let destination = self.destination_for(asset_id, document_path)?;

        let source = File::open(document_path).map_err(|e| RegistryError::not_found_or_unreadable(document_path, e))?;
        copy_into(source, &destination)?;

        log::info!("Successfully uploaded document to: {}", destination.display());
        Ok(destination)
    }

    /// Run every check and return where the document would land
    pub fn destination_for(&self, asset_id: &str, document_path: &Path) -> Result<PathBuf, RegistryError> {
        let asset = AssetId::parse(asset_id)?;

        if !document_path.is_file() {
            return Err(RegistryError::source_not_found(document_path));
        }

        let asset_dir = self.paths.asset_dir(asset.chain.handle, &asset.token_id);
        if !asset_dir.is_dir() {
            return Err(RegistryError::asset_not_provisioned(asset_dir));
        }

        let file_name = document_path
            .file_name()
            .ok_or_else(|| RegistryError::source_not_found(document_path))?;
        let extension = document_extension(document_path);
        if !ALLOWED_DOCUMENT_EXTENSIONS.contains(&extension.as_str()) {
            return Err(RegistryError::unsupported_extension(extension));
        }

        let destination = asset_dir.join(file_name);
        if destination.exists() {
            return Err(RegistryError::already_exists(destination));
        }
        Ok(destination)
    }
}

/// Lower-cased suffix from the last `.` of the file name, dot included, or empty.
///
/// A dotfile such as `.md` counts as its own extension.
pub fn document_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rfind('.').map(|idx| name[idx..].to_lowercase()))
        .unwrap_or_default()
}

// The destination is created exclusively; on a failed copy the partial file is removed.
fn copy_into<R: Read>(mut source: R, destination: &Path) -> Result<(), RegistryError> {
    let mut target = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => RegistryError::already_exists(destination),
            _ => RegistryError::copy_failure(destination, e),
        })?;

    let copied = io::copy(&mut source, &mut target).and_then(|_| target.sync_all());
    if let Err(e) = copied {
        drop(target);
        if let Err(cleanup) = fs::remove_file(destination) {
            log::warn!("Failed to remove partial document {}: {}", destination.display(), cleanup);
        }
        return Err(RegistryError::copy_failure(destination, e));
    }
    Ok(())
}
