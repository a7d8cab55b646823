//! Registry configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `asset-manager.{toml,json,yaml}` file (or the file named by
//! `ASSET_MANAGER_CONFIG`), then `ASSET_MANAGER__*` environment variables, e.g.
//! `ASSET_MANAGER__ORG_NAME` or `ASSET_MANAGER__URLS__LOGO`.
//!
//! The loaded value is immutable and passed explicitly to every operation.

use std::env;
use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    CONFIG_ENV_PREFIX, CONFIG_FILE_BASENAME, CONFIG_FILE_ENV, DEFAULT_ASSETS_APP_URL, DEFAULT_LOGO_URL,
    DEFAULT_ORG_NAME, DEFAULT_ROOT_DIR, DEFAULT_TIME_FORMAT,
};
use crate::shared::error::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Public base URL the asset logos are served from
    pub assets_app: String,
    /// Logo advertised by every token list
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Repository root containing `blockchains/`
    pub root_dir: PathBuf,
    pub org_name: String,
    pub urls: UrlConfig,
    /// strftime-style format for token list timestamps
    pub time_format: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            org_name: DEFAULT_ORG_NAME.to_string(),
            urls: UrlConfig {
                assets_app: DEFAULT_ASSETS_APP_URL.to_string(),
                logo: DEFAULT_LOGO_URL.to_string(),
            },
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl RegistryConfig {
    /// Load `.env`, then the layered configuration.
    pub fn load() -> Result<Self, RegistryError> {
        dotenv::dotenv().ok();
        let config_file = env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);
        Self::load_from(config_file.as_deref())
    }

    /// Load with an explicit config file. The file is required when given.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, RegistryError> {
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("root_dir", defaults.root_dir.to_string_lossy().to_string())?
            .set_default("org_name", defaults.org_name)?
            .set_default("urls.assets_app", defaults.urls.assets_app)?
            .set_default("urls.logo", defaults.urls.logo)?
            .set_default("time_format", defaults.time_format)?;

        builder = match config_file {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                builder.add_source(File::from(path).required(true))
            }
            None => builder.add_source(File::with_name(CONFIG_FILE_BASENAME).required(false)),
        };

        let config: RegistryConfig = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn with_root(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Reject values that would produce broken token lists
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut errors = Vec::new();

        if self.org_name.trim().is_empty() {
            errors.push("org_name cannot be empty".to_string());
        }
        if self.urls.assets_app.trim().is_empty() {
            errors.push("urls.assets_app cannot be empty".to_string());
        }
        if self.urls.logo.trim().is_empty() {
            errors.push("urls.logo cannot be empty".to_string());
        }
        if self.time_format.is_empty() {
            errors.push("time_format cannot be empty".to_string());
        } else if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            errors.push(format!("time_format is not a valid format string: {}", self.time_format));
        }

        if !errors.is_empty() {
            return Err(RegistryError::config(errors.join("; ")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = RegistryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.org_name, "Trust Wallet");
        assert_eq!(config.urls.assets_app, "https://assets-cdn.trustwallet.com");
    }

    #[test]
    fn test_config_validation() {
        let mut config = RegistryConfig::default();
        config.org_name = "  ".to_string();
        config.urls.logo = String::new();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("org_name"));
        assert!(err.contains("urls.logo"));

        let mut config = RegistryConfig::default();
        config.time_format = "%Y-%Q".to_string();
        assert!(matches!(config.validate(), Err(RegistryError::Config(_))));
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registry.toml");
        std::fs::write(
            &path,
            "org_name = \"Example Org\"\n\n[urls]\nlogo = \"https://example.org/logo.png\"\n",
        )
        .unwrap();

        let config = RegistryConfig::load_from(Some(&path)).expect("Failed to load config");

        assert_eq!(config.org_name, "Example Org");
        assert_eq!(config.urls.logo, "https://example.org/logo.png");
        assert_eq!(config.urls.assets_app, DEFAULT_ASSETS_APP_URL);
        assert_eq!(config.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_load_from_missing_required_file() {
        let dir = TempDir::new().unwrap();
        let result = RegistryConfig::load_from(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(RegistryError::Config(_))));
    }

    #[test]
    fn test_with_root() {
        let config = RegistryConfig::default().with_root("/srv/assets");
        assert_eq!(config.root_dir, PathBuf::from("/srv/assets"));
    }
}
