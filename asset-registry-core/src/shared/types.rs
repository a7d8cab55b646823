use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::constants::{TOKENLIST_DEFAULT_FILE_NAME, TOKENLIST_EXTENDED_FILE_NAME};
use crate::shared::error::RegistryError;

// Token list tiers - each chain carries one list per kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenListKind {
    Default,
    Extended,
}

impl TokenListKind {
    /// Every kind, in duplicate-scan order
    pub const ALL: [TokenListKind; 2] = [TokenListKind::Default, TokenListKind::Extended];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenListKind::Default => "default",
            TokenListKind::Extended => "extended",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            TokenListKind::Default => TOKENLIST_DEFAULT_FILE_NAME,
            TokenListKind::Extended => TOKENLIST_EXTENDED_FILE_NAME,
        }
    }
}

impl fmt::Display for TokenListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenListKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(TokenListKind::Default),
            "extended" => Ok(TokenListKind::Extended),
            other => Err(RegistryError::config(format!("Unknown token list kind: {}", other))),
        }
    }
}

// Result types for better error handling
pub type RegistryResult<T> = Result<T, RegistryError>;
