//! Error handling for the asset registry
//!
//! This module defines the error types used throughout the registry core.
//! Every variant carries the offending path or identifier so the caller can act on it.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shared::constants::ALLOWED_DOCUMENT_EXTENSIONS;

/// Registry error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid asset identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Unsupported blockchain: {0}")]
    UnsupportedChain(String),

    #[error("Failed to read data from {}: {reason}", .path.display())]
    NotFoundOrUnreadable { path: PathBuf, reason: String },

    #[error("Failed to read token list {}: {reason}", .path.display())]
    ReadFailure { path: PathBuf, reason: String },

    #[error("Failed to get asset info for {token_id}: {reason}")]
    MissingAssetInfo { token_id: String, reason: String },

    #[error("Duplicate asset {asset_id}, already exists in {}", .path.display())]
    DuplicateAsset { asset_id: String, path: PathBuf },

    #[error("Failed to write {}: {reason}", .path.display())]
    WriteFailure { path: PathBuf, reason: String },

    #[error("Failed to copy document to {}: {reason}", .path.display())]
    CopyFailure { path: PathBuf, reason: String },

    #[error("Asset directory does not exist: {}. Create the asset first using the add-token command", .0.display())]
    AssetNotProvisioned(PathBuf),

    #[error("Unsupported file extension: {0}. Supported extensions: {exts}", exts = ALLOWED_DOCUMENT_EXTENSIONS.join(", "))]
    UnsupportedExtension(String),

    #[error("Document file does not exist: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Token list version cannot be incremented past its maximum: {}", .0.display())]
    VersionExhausted(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier(identifier.into())
    }

    /// Create an unsupported chain error
    pub fn unsupported_chain(chain: impl Into<String>) -> Self {
        Self::UnsupportedChain(chain.into())
    }

    /// Create a not found or unreadable error
    pub fn not_found_or_unreadable(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::NotFoundOrUnreadable {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a token list read failure
    pub fn read_failure(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::ReadFailure {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a missing asset info error
    pub fn missing_asset_info(token_id: impl Into<String>, reason: impl ToString) -> Self {
        Self::MissingAssetInfo {
            token_id: token_id.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a duplicate asset error
    pub fn duplicate_asset(asset_id: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::DuplicateAsset {
            asset_id: asset_id.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a write failure
    pub fn write_failure(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::WriteFailure {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a copy failure
    pub fn copy_failure(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::CopyFailure {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn asset_not_provisioned(asset_dir: impl AsRef<Path>) -> Self {
        Self::AssetNotProvisioned(asset_dir.as_ref().to_path_buf())
    }

    pub fn unsupported_extension(extension: impl Into<String>) -> Self {
        Self::UnsupportedExtension(extension.into())
    }

    pub fn source_not_found(path: impl AsRef<Path>) -> Self {
        Self::SourceNotFound(path.as_ref().to_path_buf())
    }

    pub fn already_exists(path: impl AsRef<Path>) -> Self {
        Self::AlreadyExists(path.as_ref().to_path_buf())
    }

    pub fn version_exhausted(list_path: impl AsRef<Path>) -> Self {
        Self::VersionExhausted(list_path.as_ref().to_path_buf())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// Library error conversions
impl From<::config::ConfigError> for RegistryError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_creation() {
        let invalid = RegistryError::invalid_identifier("c60");
        let duplicate = RegistryError::duplicate_asset("c60_t0x1", "blockchains/ethereum/tokenlist.json");
        let config = RegistryError::config("empty org name");

        assert!(matches!(invalid, RegistryError::InvalidIdentifier(_)));
        assert!(matches!(duplicate, RegistryError::DuplicateAsset { .. }));
        assert!(matches!(config, RegistryError::Config(_)));
    }

    #[test]
    fn test_error_display_carries_context() {
        let error = RegistryError::duplicate_asset("c60_t0x1", "blockchains/ethereum/tokenlist.json");
        let display = error.to_string();

        assert!(display.contains("c60_t0x1"));
        assert!(display.contains("blockchains/ethereum/tokenlist.json"));
    }

    #[test]
    fn test_unsupported_extension_lists_whitelist() {
        let display = RegistryError::unsupported_extension(".exe").to_string();

        assert!(display.contains(".exe"));
        for ext in ALLOWED_DOCUMENT_EXTENSIONS {
            assert!(display.contains(ext));
        }
    }

    #[test]
    fn test_asset_not_provisioned_guidance() {
        let display = RegistryError::asset_not_provisioned("blockchains/ethereum/assets/0x1").to_string();
        assert!(display.contains("add-token"));
    }
}
