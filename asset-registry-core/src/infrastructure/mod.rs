//! Infrastructure layer - filesystem and configuration
//!
//! This module contains the concrete record store, the registry path layout
//! and configuration loading.

pub mod config;
pub mod paths;
pub mod storage;

// Re-export infrastructure components
pub use self::config::{RegistryConfig, UrlConfig};
pub use paths::{asset_logo_url, PathResolver};
pub use storage::{prepare_json_data, read_json, write_json, FileStore};
