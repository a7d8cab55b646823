//! Composite asset identifier
//!
//! Two textual forms are accepted:
//! - canonical `c<coin id>_t<token id>`, e.g. `c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7`
//! - handle form `<chain handle>_<token id>`, e.g. `ethereum_0xdAC17F958D2ee523a2206206994597C13D831ec7`

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use crate::domain::entities::chain::Chain;
use crate::shared::constants::{ASSET_ID_COIN_PREFIX, ASSET_ID_HANDLE_SEPARATOR, ASSET_ID_TOKEN_SEPARATOR};
use crate::shared::error::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId {
    pub chain: &'static Chain,
    pub token_id: String,
}

impl AssetId {
    pub fn new(chain: &'static Chain, token_id: impl Into<String>) -> Self {
        Self {
            chain,
            token_id: token_id.into(),
        }
    }

    /// Parse either identifier form.
    ///
    /// Malformed input is `InvalidIdentifier`; a well-formed identifier naming
    /// a chain missing from the registry is `UnsupportedChain`.
    pub fn parse(raw: &str) -> Result<Self, RegistryError> {
        let raw = raw.trim();

        if let Some((coin, token_id)) = Self::split_canonical(raw) {
            if token_id.is_empty() {
                return Err(RegistryError::invalid_identifier(raw));
            }
            let coin_id: u32 = coin
                .parse()
                .map_err(|_| RegistryError::invalid_identifier(raw))?;
            Self::validate_token_id(token_id).map_err(|_| RegistryError::invalid_identifier(raw))?;
            let chain = Chain::from_id(coin_id)
                .ok_or_else(|| RegistryError::unsupported_chain(coin_id.to_string()))?;
            return Ok(Self::new(chain, token_id));
        }

        let (handle, token_id) = raw
            .split_once(ASSET_ID_HANDLE_SEPARATOR)
            .ok_or_else(|| RegistryError::invalid_identifier(raw))?;
        if handle.is_empty() {
            return Err(RegistryError::invalid_identifier(raw));
        }
        Self::validate_token_id(token_id).map_err(|_| RegistryError::invalid_identifier(raw))?;
        let chain = Chain::from_handle(handle).ok_or_else(|| RegistryError::unsupported_chain(handle))?;

        Ok(Self::new(chain, token_id))
    }

    /// A token id names exactly one directory under `assets/`.
    ///
    /// Empty ids, separators, `.`/`..` and anything absolute or prefixed are rejected.
    pub fn validate_token_id(token_id: &str) -> Result<(), RegistryError> {
        let mut components = Path::new(token_id).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if token_id.is_empty() || token_id.contains(['/', '\\']) || !single_normal {
            return Err(RegistryError::invalid_identifier(token_id));
        }
        Ok(())
    }

    // `c` + digits + `_t` + rest. Handles such as `cosmos` fall through to the handle form.
    fn split_canonical(raw: &str) -> Option<(&str, &str)> {
        let rest = raw.strip_prefix(ASSET_ID_COIN_PREFIX)?;
        let (coin, token_id) = rest.split_once(ASSET_ID_TOKEN_SEPARATOR)?;
        if coin.is_empty() || !coin.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some((coin, token_id))
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            ASSET_ID_COIN_PREFIX, self.chain.id, ASSET_ID_TOKEN_SEPARATOR, self.token_id
        )
    }
}

impl FromStr for AssetId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_form() {
        let id = AssetId::parse("c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7").unwrap();
        assert_eq!(id.chain.handle, "ethereum");
        assert_eq!(id.token_id, "0xdAC17F958D2ee523a2206206994597C13D831ec7");
        assert_eq!(id.to_string(), "c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7");
    }

    #[test]
    fn test_parse_handle_form() {
        let id = AssetId::parse("ethereum_0xTOKEN").unwrap();
        assert_eq!(id.chain.id, 60);
        assert_eq!(id.token_id, "0xTOKEN");

        // handles starting with `c` are not mistaken for the canonical form
        let id = AssetId::parse("cosmos_tuatom").unwrap();
        assert_eq!(id.chain.handle, "cosmos");
        assert_eq!(id.token_id, "tuatom");
    }

    #[test]
    fn test_parse_keeps_underscores_in_token() {
        let id = AssetId::parse("c501_tmint_with_underscore").unwrap();
        assert_eq!(id.chain.handle, "solana");
        assert_eq!(id.token_id, "mint_with_underscore");
    }

    #[test]
    fn test_parse_invalid_identifiers() {
        for raw in ["", "ethereum", "_0xabc", "ethereum_", "c60_t", "c99999999999_t0x1"] {
            assert!(
                matches!(AssetId::parse(raw), Err(RegistryError::InvalidIdentifier(_))),
                "expected InvalidIdentifier for {raw:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_path_like_tokens() {
        for raw in [
            "ethereum_/tmp/elsewhere",
            "c60_t/etc",
            "ethereum_..",
            "ethereum_.",
            "ethereum_../../outside",
            "c60_tnested/token",
            "ethereum_back\\slash",
        ] {
            assert!(
                matches!(AssetId::parse(raw), Err(RegistryError::InvalidIdentifier(_))),
                "expected InvalidIdentifier for {raw:?}"
            );
        }

        // dots inside a single name are fine
        assert_eq!(AssetId::parse("ethereum_token.v2").unwrap().token_id, "token.v2");
    }

    #[test]
    fn test_validate_token_id() {
        assert!(AssetId::validate_token_id("0xdAC17F958D2ee523a2206206994597C13D831ec7").is_ok());
        assert!(AssetId::validate_token_id("").is_err());
        assert!(AssetId::validate_token_id("/abs").is_err());
        assert!(AssetId::validate_token_id("..").is_err());
    }

    #[test]
    fn test_parse_unsupported_chain() {
        assert!(matches!(
            AssetId::parse("c424242_t0xabc"),
            Err(RegistryError::UnsupportedChain(_))
        ));
        assert!(matches!(
            AssetId::parse("notachain_0xabc"),
            Err(RegistryError::UnsupportedChain(_))
        ));
    }
}
