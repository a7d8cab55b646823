//! Asset Registry Core
//!
//! File-based registry of blockchain asset metadata.
//! Maintains per-asset info records, per-chain token lists and supporting documents.
//!
//! ## Architecture
//!
//! - **Core**: Asset info templates, token list appends, document attachment
//! - **Domain**: Chains, asset identifiers, records and the record store seam
//! - **Infrastructure**: Filesystem store, path layout, configuration
//! - **Shared**: Common types, constants, and errors
//!
//! ## Usage
//!
//! ```no_run
//! use asset_registry_core::{init_registry, TemplateMode, TokenListKind};
//!
//! let registry = init_registry()?;
//!
//! // Create the info record, fill it in by hand, then list the asset
//! registry.create_asset_template("c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7", TemplateMode::CreateNew)?;
//! let list = registry.add_asset_to_list("c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7", TokenListKind::Default)?;
//! println!("tokenlist version {}", list.version.major);
//! # Ok::<(), asset_registry_core::RegistryError>(())
//! ```

use std::path::{Path, PathBuf};

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

use crate::core::{AssetInfoManager, DocumentAttacher, TokenListManager};

// Re-export specific components
pub use crate::core::TemplateMode;
pub use crate::domain::{AssetId, AssetInfo, Chain, Field, RecordStore, TokenList, TokenListEntry};
pub use crate::infrastructure::{FileStore, PathResolver, RegistryConfig};
pub use crate::shared::error::RegistryError;
pub use crate::shared::types::{RegistryResult, TokenListKind};

// Version information
pub use crate::shared::constants::{DESCRIPTION, NAME, VERSION};

/// Load configuration from `.env`, config file and environment, and open the registry it points at
pub fn init_registry() -> RegistryResult<AssetRegistry> {
    let config = RegistryConfig::load()?;
    log::debug!("Registry root: {}", config.root_dir.display());
    Ok(AssetRegistry::new(config))
}

/// Main registry struct that provides access to all operations
pub struct AssetRegistry {
    config: RegistryConfig,
    store: FileStore,
    paths: PathResolver,
}

impl AssetRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        let paths = PathResolver::new(&config.root_dir);
        Self {
            config,
            store: FileStore::new(),
            paths,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    /// Write an info template for a new asset
    pub fn create_asset_template(&self, asset_id: &str, mode: TemplateMode) -> RegistryResult<PathBuf> {
        AssetInfoManager::new(&self.store, &self.paths).create_template(asset_id, mode)
    }

    pub fn get_asset_info(&self, chain: &Chain, token_id: &str) -> RegistryResult<AssetInfo> {
        AssetInfoManager::new(&self.store, &self.paths).get_asset_info(chain, token_id)
    }

    pub fn add_token_to_list(
        &self,
        chain: &Chain,
        asset_id: &str,
        token_id: &str,
        kind: TokenListKind,
    ) -> RegistryResult<TokenList> {
        self.token_lists().add_token_to_list(chain, asset_id, token_id, kind)
    }

    /// Add an asset to a token list of its chain, parsing the identifier first
    pub fn add_asset_to_list(&self, asset_id: &str, kind: TokenListKind) -> RegistryResult<TokenList> {
        self.token_lists().add_asset_to_list(asset_id, kind)
    }

    pub fn attach_document(&self, asset_id: &str, document_path: &Path) -> RegistryResult<PathBuf> {
        DocumentAttacher::new(&self.paths).attach_document(asset_id, document_path)
    }

    fn token_lists(&self) -> TokenListManager<'_> {
        TokenListManager::new(&self.store, &self.paths, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn registry(dir: &TempDir) -> AssetRegistry {
        AssetRegistry::new(RegistryConfig::default().with_root(dir.path()))
    }

    fn seed_empty_lists(registry: &AssetRegistry, handle: &str) {
        let empty = r#"{"name": "", "logoURI": "", "timestamp": "", "tokens": [], "version": {"major": 0}}"#;
        for kind in TokenListKind::ALL {
            let path = registry.paths().token_list_path(handle, kind);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, empty).unwrap();
        }
    }

    #[test]
    fn test_registry_workflow() {
        let dir = TempDir::new().unwrap();
        let registry = registry(&dir);
        seed_empty_lists(&registry, "tron");

        let info_path = registry
            .create_asset_template("c195_tTR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", TemplateMode::CreateNew)
            .expect("Failed to create template");
        fs::write(
            &info_path,
            r#"{"name": "Tether", "type": "TRC20", "symbol": "USDT", "decimals": 6, "id": "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"}"#,
        )
        .unwrap();

        let list = registry
            .add_asset_to_list("c195_tTR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", TokenListKind::Default)
            .expect("Failed to add to token list");
        assert_eq!(list.name, "Trust Wallet: Tron");
        assert_eq!(list.version.major, 1);
        assert_eq!(list.tokens[0].symbol, "USDT");

        let written = fs::read_to_string(registry.paths().token_list_path("tron", TokenListKind::Default)).unwrap();
        assert!(written.starts_with("{\n    \"name\": \"Trust Wallet: Tron\""));
        assert!(written.ends_with("}\n"));

        let whitepaper = dir.path().join("usdt.pdf");
        fs::write(&whitepaper, b"%PDF").unwrap();
        let destination = registry
            .attach_document("tron_TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t", &whitepaper)
            .expect("Failed to attach document");
        assert_eq!(destination, info_path.with_file_name("usdt.pdf"));
    }

    #[test]
    fn test_get_asset_info_through_registry() {
        let dir = TempDir::new().unwrap();
        let registry = registry(&dir);
        registry.create_asset_template("ethereum_0xabc", TemplateMode::CreateNew).unwrap();

        let ethereum = Chain::from_handle("ethereum").unwrap();
        let info = registry.get_asset_info(ethereum, "0xabc").unwrap();
        assert_eq!(info, AssetInfo::template("0xabc"));
    }
}
