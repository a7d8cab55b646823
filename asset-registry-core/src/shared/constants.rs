//! Constants for the asset registry
//!
//! This module contains the layout names, defaults and whitelists used throughout the registry core.

// Repository layout
pub const BLOCKCHAINS_DIR: &str = "blockchains";
pub const ASSETS_DIR: &str = "assets";
pub const INFO_FILE_NAME: &str = "info.json";
pub const LOGO_FILE_NAME: &str = "logo.png";
pub const TOKENLIST_DEFAULT_FILE_NAME: &str = "tokenlist.json";
pub const TOKENLIST_EXTENDED_FILE_NAME: &str = "tokenlist-extended.json";

// Asset identifier
pub const ASSET_ID_COIN_PREFIX: char = 'c';
pub const ASSET_ID_TOKEN_SEPARATOR: &str = "_t";
pub const ASSET_ID_HANDLE_SEPARATOR: char = '_';

// Configuration defaults
pub const DEFAULT_ORG_NAME: &str = "Trust Wallet";
pub const DEFAULT_ASSETS_APP_URL: &str = "https://assets-cdn.trustwallet.com";
pub const DEFAULT_LOGO_URL: &str = "https://trustwallet.com/assets/images/favicon.png";
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
pub const DEFAULT_ROOT_DIR: &str = ".";

pub const CONFIG_FILE_ENV: &str = "ASSET_MANAGER_CONFIG";
pub const CONFIG_FILE_BASENAME: &str = "asset-manager";
pub const CONFIG_ENV_PREFIX: &str = "ASSET_MANAGER";

// JSON formatting
pub const JSON_INDENT: &[u8] = b"    ";

// Supported document extensions (lower case, compared case-insensitively)
pub const ALLOWED_DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt", ".md"];

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_whitelist() {
        assert_eq!(ALLOWED_DOCUMENT_EXTENSIONS.len(), 5);
        assert!(ALLOWED_DOCUMENT_EXTENSIONS.contains(&".md"));
        assert!(ALLOWED_DOCUMENT_EXTENSIONS.contains(&".docx"));
        assert!(ALLOWED_DOCUMENT_EXTENSIONS
            .iter()
            .all(|ext| ext.starts_with('.') && *ext == ext.to_lowercase()));
    }

    #[test]
    fn test_tokenlist_file_names_differ() {
        assert_ne!(TOKENLIST_DEFAULT_FILE_NAME, TOKENLIST_EXTENDED_FILE_NAME);
    }
}
