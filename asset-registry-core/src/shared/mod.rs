//! Shared types, constants, and errors
//!
//! This module contains common types and constants used throughout
//! the registry core. It provides a centralized location for shared functionality.

pub mod types;
pub mod constants;
pub mod error;

// Re-export shared components
pub use types::*;
pub use constants::*;
pub use error::*;
