//! Domain layer - entities and repositories
//!
//! This module contains the data model of the registry and the
//! storage seam the operations are written against.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
