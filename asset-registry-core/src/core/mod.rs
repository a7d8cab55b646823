//! Core registry operations
//!
//! This module contains the operations over the registry tree: asset info
//! templates, token list appends and document attachment.

pub mod asset_info;
pub mod documents;
pub mod token_list;

pub use asset_info::{AssetInfoManager, TemplateMode};
pub use documents::DocumentAttacher;
pub use token_list::TokenListManager;
