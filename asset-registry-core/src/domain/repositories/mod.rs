//! Domain repositories
//!
//! This module contains the repository traits for record access.

pub mod record_store;

// Re-export repositories
pub use record_store::*;
