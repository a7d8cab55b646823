//! Record storage
//!
//! This module contains the filesystem record store and the JSON helpers built on it.

pub mod file_store;
pub mod json;

pub use file_store::FileStore;
pub use json::{prepare_json_data, read_json, write_json};
