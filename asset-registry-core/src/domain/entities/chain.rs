//! Chain entity and the static chain registry

use serde::Serialize;

/// A blockchain network tracked by the registry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Chain {
    /// SLIP-44 coin type
    pub id: u32,
    /// Directory name under `blockchains/`
    pub handle: &'static str,
    pub name: &'static str,
}

impl Chain {
    const fn new(id: u32, handle: &'static str, name: &'static str) -> Self {
        Self { id, handle, name }
    }

    /// Look up a chain by its numeric identifier
    pub fn from_id(id: u32) -> Option<&'static Chain> {
        CHAINS.iter().find(|chain| chain.id == id)
    }

    /// Look up a chain by its handle, case-insensitively
    pub fn from_handle(handle: &str) -> Option<&'static Chain> {
        CHAINS.iter().find(|chain| chain.handle.eq_ignore_ascii_case(handle))
    }
}

static CHAINS: &[Chain] = &[
    Chain::new(0, "bitcoin", "Bitcoin"),
    Chain::new(2, "litecoin", "Litecoin"),
    Chain::new(3, "doge", "Dogecoin"),
    Chain::new(60, "ethereum", "Ethereum"),
    Chain::new(61, "classic", "Ethereum Classic"),
    Chain::new(118, "cosmos", "Cosmos Hub"),
    Chain::new(144, "ripple", "XRP"),
    Chain::new(195, "tron", "Tron"),
    Chain::new(354, "polkadot", "Polkadot"),
    Chain::new(501, "solana", "Solana"),
    Chain::new(607, "ton", "TON"),
    Chain::new(637, "aptos", "Aptos"),
    Chain::new(714, "binance", "BNB Beacon Chain"),
    Chain::new(784, "sui", "Sui"),
    Chain::new(966, "polygon", "Polygon"),
    Chain::new(8453, "base", "Base"),
    Chain::new(10000070, "optimism", "Optimism"),
    Chain::new(10000250, "fantom", "Fantom"),
    Chain::new(10009000, "avalanchec", "Avalanche C-Chain"),
    Chain::new(10042221, "arbitrum", "Arbitrum"),
    Chain::new(20000714, "smartchain", "BNB Smart Chain"),
];
