//! Path resolution for the on-disk registry layout
//!
//! ```text
//! <root>/blockchains/<handle>/tokenlist.json
//! <root>/blockchains/<handle>/tokenlist-extended.json
//! <root>/blockchains/<handle>/assets/<token>/info.json
//! ```

use std::path::PathBuf;

use crate::shared::constants::{ASSETS_DIR, BLOCKCHAINS_DIR, INFO_FILE_NAME, LOGO_FILE_NAME};
use crate::shared::types::TokenListKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn chain_dir(&self, chain_handle: &str) -> PathBuf {
        self.root.join(BLOCKCHAINS_DIR).join(chain_handle)
    }

    pub fn asset_dir(&self, chain_handle: &str, token_id: &str) -> PathBuf {
        self.chain_dir(chain_handle).join(ASSETS_DIR).join(token_id)
    }

    pub fn info_path(&self, chain_handle: &str, token_id: &str) -> PathBuf {
        self.asset_dir(chain_handle, token_id).join(INFO_FILE_NAME)
    }

    pub fn token_list_path(&self, chain_handle: &str, kind: TokenListKind) -> PathBuf {
        self.chain_dir(chain_handle).join(kind.file_name())
    }
}

/// Public URL of an asset logo, independent of the local root.
pub fn asset_logo_url(base_url: &str, chain_handle: &str, token_id: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}/{}",
        base_url.trim_end_matches('/'),
        BLOCKCHAINS_DIR,
        chain_handle,
        ASSETS_DIR,
        token_id,
        LOGO_FILE_NAME
    )
}
