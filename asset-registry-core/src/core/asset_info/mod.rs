//! Asset info records
//!
//! Reading an asset's `info.json` and creating empty templates for new assets.

use std::path::PathBuf;

use crate::domain::{AssetId, AssetInfo, Chain, RecordStore};
use crate::infrastructure::paths::PathResolver;
use crate::infrastructure::storage::{read_json, write_json};
use crate::shared::error::RegistryError;

/// Whether template creation may replace an existing record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateMode {
    #[default]
    CreateNew,
    Overwrite,
}

pub struct AssetInfoManager<'a> {
    store: &'a dyn RecordStore,
    paths: &'a PathResolver,
}

impl<'a> AssetInfoManager<'a> {
    pub fn new(store: &'a dyn RecordStore, paths: &'a PathResolver) -> Self {
        Self { store, paths }
    }

    /// Load the info record of `token_id` on `chain`. Read-only.
    pub fn get_asset_info(&self, chain: &Chain, token_id: &str) -> Result<AssetInfo, RegistryError> {
        let path = self.paths.info_path(chain.handle, token_id);
        read_json(self.store, &path)
    }

    /// Write an empty-placeholder info record for `asset_id` and return its path.
    ///
    /// In [`TemplateMode::CreateNew`] an existing record is left alone and
    /// `AlreadyExists` is returned.
    pub fn create_template(&self, asset_id: &str, mode: TemplateMode) -> Result<PathBuf, RegistryError> {
        let asset = AssetId::parse(asset_id).map_err(|e| match e {
            RegistryError::UnsupportedChain(chain) => {
                RegistryError::invalid_identifier(format!("{} (unknown chain {})", asset_id, chain))
            }
            other => other,
        })?;

        let path = self.paths.info_path(asset.chain.handle, &asset.token_id);
        if mode == TemplateMode::CreateNew && self.store.exists(&path) {
            return Err(RegistryError::already_exists(&path));
        }

        write_json(self.store, &path, &AssetInfo::template(&asset.token_id))?;
        log::info!("Created asset info template at {}", path.display());
        Ok(path)
    }
}
