//! Token list entity
//!
//! One `tokenlist*.json` document per chain and list kind.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::asset_id::AssetId;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenList {
    pub name: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    pub timestamp: String,
    pub tokens: Vec<TokenListEntry>,
    pub version: Version,
}

impl TokenList {
    /// Whether an entry names the same asset as `asset_id`.
    ///
    /// Identifiers are compared parsed, so `c60_t0x1` and `ethereum_0x1` match.
    /// Entries that do not parse fall back to exact string comparison.
    pub fn contains_asset(&self, asset_id: &str) -> bool {
        let wanted = AssetId::parse(asset_id).ok();
        self.tokens.iter().any(|token| {
            token.asset == asset_id
                || matches!((&wanted, AssetId::parse(&token.asset)), (Some(a), Ok(b)) if *a == b)
        })
    }
}

/// Only the major component is tracked; it grows by one per append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
}

/// A frozen copy of an asset's info record as of the moment it was listed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TokenListEntry {
    pub asset: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    /// Keys this model does not know about, such as `pairs`, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_list_shape() {
        let list = TokenList {
            name: "Trust Wallet: Ethereum".to_string(),
            logo_uri: "https://example.org/logo.png".to_string(),
            timestamp: "2024-01-01T00:00:00.000000".to_string(),
            tokens: vec![TokenListEntry {
                asset: "c60_t0x1".to_string(),
                token_type: "ERC20".to_string(),
                address: "0x1".to_string(),
                name: "One".to_string(),
                symbol: "ONE".to_string(),
                decimals: 18,
                logo_uri: "https://example.org/one.png".to_string(),
                extra: Map::new(),
            }],
            version: Version { major: 3 },
        };

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["logoURI"], json!("https://example.org/logo.png"));
        assert_eq!(value["version"], json!({ "major": 3 }));
        assert_eq!(value["tokens"][0]["type"], json!("ERC20"));
        assert_eq!(value["tokens"][0]["logoURI"], json!("https://example.org/one.png"));
        assert!(list.contains_asset("c60_t0x1"));
        assert!(list.contains_asset("ethereum_0x1"));
        assert!(list.contains_asset(" c60_t0x1"));
        assert!(!list.contains_asset("c60_t0x2"));
        assert!(!list.contains_asset("c61_t0x1"));
        assert!(!list.contains_asset("garbage"));
    }

    #[test]
    fn test_unknown_entry_keys_survive_rewrite() {
        let raw = json!({
            "asset": "c60_t0x1",
            "type": "ERC20",
            "address": "0x1",
            "name": "One",
            "symbol": "ONE",
            "decimals": 18,
            "logoURI": "https://example.org/one.png",
            "pairs": [{ "base": "c60" }]
        });

        let entry: TokenListEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.extra.get("pairs"), Some(&json!([{ "base": "c60" }])));
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }
}
