//! Token list management
//!
//! Appends an asset to one of a chain's token lists. Both lists of the chain are
//! validated before anything is written, and a successful append rewrites exactly
//! one list file with its major version bumped by one.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::core::asset_info::AssetInfoManager;
use crate::domain::{AssetId, AssetInfo, Chain, RecordStore, TokenList, TokenListEntry, Version};
use crate::infrastructure::config::RegistryConfig;
use crate::infrastructure::paths::{asset_logo_url, PathResolver};
use crate::infrastructure::storage::{read_json, write_json};
use crate::shared::error::RegistryError;
use crate::shared::types::TokenListKind;

pub struct TokenListManager<'a> {
    store: &'a dyn RecordStore,
    paths: &'a PathResolver,
    config: &'a RegistryConfig,
}

impl<'a> TokenListManager<'a> {
    pub fn new(store: &'a dyn RecordStore, paths: &'a PathResolver, config: &'a RegistryConfig) -> Self {
        Self { store, paths, config }
    }

    /// Parse `asset_id` and add it to the `kind` list of its chain.
    ///
    /// The entry stores the canonical `c<coin>_t<token>` form whichever form was given.
    pub fn add_asset_to_list(&self, asset_id: &str, kind: TokenListKind) -> Result<TokenList, RegistryError> {
        let asset = AssetId::parse(asset_id)?;
        self.add_token_to_list(asset.chain, &asset.to_string(), &asset.token_id, kind)
    }

    /// Append `asset_id` to the `kind` list of `chain` and persist the re-versioned list.
    pub fn add_token_to_list(
        &self,
        chain: &Chain,
        asset_id: &str,
        token_id: &str,
        kind: TokenListKind,
    ) -> Result<TokenList, RegistryError> {
        self.add_token_to_list_at(chain, asset_id, token_id, kind, Utc::now())
    }

    pub(crate) fn add_token_to_list_at(
        &self,
        chain: &Chain,
        asset_id: &str,
        token_id: &str,
        kind: TokenListKind,
        now: DateTime<Utc>,
    ) -> Result<TokenList, RegistryError> {
        log::debug!("Adding {} to {} token list of {}", asset_id, kind, chain.handle);
        AssetId::validate_token_id(token_id)?;

        // Every list of the chain is checked before any mutation.
        self.ensure_not_listed(chain, asset_id)?;

        let list_path = self.paths.token_list_path(chain.handle, kind);
        let list = self.load_list(chain, kind)?;

        let info = AssetInfoManager::new(self.store, self.paths)
            .get_asset_info(chain, token_id)
            .map_err(|e| RegistryError::missing_asset_info(token_id, e))?;

        let entry = self.build_entry(chain, asset_id, token_id, info);
        let updated = self.next_version(chain, &list_path, list, entry, now)?;

        write_json(self.store, &list_path, &updated)?;
        log::info!(
            "Added {} to {} (version {}, {} tokens)",
            asset_id,
            list_path.display(),
            updated.version.major,
            updated.tokens.len()
        );
        Ok(updated)
    }

    /// Fail with `DuplicateAsset` if any list of `chain` already holds `asset_id`
    /// under any spelling.
    pub fn ensure_not_listed(&self, chain: &Chain, asset_id: &str) -> Result<(), RegistryError> {
        for kind in TokenListKind::ALL {
            let list = self.load_list(chain, kind)?;
            if list.contains_asset(asset_id) {
                return Err(RegistryError::duplicate_asset(
                    asset_id,
                    self.paths.token_list_path(chain.handle, kind),
                ));
            }
        }
        Ok(())
    }

    pub fn load_list(&self, chain: &Chain, kind: TokenListKind) -> Result<TokenList, RegistryError> {
        let path = self.paths.token_list_path(chain.handle, kind);
        read_json(self.store, &path).map_err(|e| match e {
            RegistryError::NotFoundOrUnreadable { path, reason } => RegistryError::ReadFailure { path, reason },
            other => other,
        })
    }

    fn build_entry(&self, chain: &Chain, asset_id: &str, token_id: &str, info: AssetInfo) -> TokenListEntry {
        TokenListEntry {
            asset: asset_id.to_string(),
            token_type: info.token_type.value_or_empty(),
            address: info.id.into_option().unwrap_or_else(|| token_id.to_string()),
            name: info.name.value_or_empty(),
            symbol: info.symbol.value_or_empty(),
            decimals: info.decimals.value_or_empty(),
            logo_uri: asset_logo_url(&self.config.urls.assets_app, chain.handle, token_id),
            extra: Default::default(),
        }
    }

    fn next_version(
        &self,
        chain: &Chain,
        list_path: &Path,
        list: TokenList,
        entry: TokenListEntry,
        now: DateTime<Utc>,
    ) -> Result<TokenList, RegistryError> {
        let major = list
            .version
            .major
            .checked_add(1)
            .ok_or_else(|| RegistryError::version_exhausted(list_path))?;
        let mut tokens = list.tokens;
        tokens.push(entry);

        Ok(TokenList {
            name: format!("{}: {}", self.config.org_name, chain.name),
            logo_uri: self.config.urls.logo.clone(),
            timestamp: self.format_timestamp(now)?,
            tokens,
            version: Version { major },
        })
    }

    fn format_timestamp(&self, now: DateTime<Utc>) -> Result<String, RegistryError> {
        let mut timestamp = String::new();
        write!(timestamp, "{}", now.format(&self.config.time_format)).map_err(|_| {
            RegistryError::config(format!("Invalid time format: {}", self.config.time_format))
        })?;
        Ok(timestamp)
    }
}
