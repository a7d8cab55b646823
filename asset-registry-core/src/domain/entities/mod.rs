//! Domain entities and value objects
//!
//! This module contains the core domain entities that represent
//! the registry concepts: chains, asset identifiers, info records and token lists.

pub mod chain;
pub mod asset_id;
pub mod asset_info;
pub mod token_list;

// Re-export entities
pub use chain::*;
pub use asset_id::*;
pub use asset_info::*;
pub use token_list::*;
