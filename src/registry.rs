use std::collections::HashMap;

use alloy::primitives::{address, Address};
use eyre::{eyre, Result};
use url::Url;

use crate::metadata::TokenMetadata;

/// Core Hyperlane infrastructure addresses on one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreContracts {
    pub mailbox: Address,
    pub multisig_ism: Address,
    pub default_igp: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEntry {
    pub domain: u32,
    pub rpc_url: Url,
    pub core: CoreContracts,
    /// Descriptor for the chain's native asset, when one is registered.
    pub native_token: Option<TokenMetadata>,
}

/// Keyed lookup for per-chain infrastructure. Passed into the deployer so
/// tests can substitute fixtures.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    entries: HashMap<String, ChainEntry>,
}

impl ChainRegistry {
    pub fn with_chain(mut self, name: impl Into<String>, entry: ChainEntry) -> Self {
        self.entries.insert(name.into(), entry);
        self
    }

    pub fn get(&self, chain: &str) -> Result<&ChainEntry> {
        self.entries
            .get(chain)
            .ok_or_else(|| eyre!("chain {chain} is not present in the chain registry"))
    }

    pub fn core(&self, chain: &str) -> Result<&CoreContracts> {
        Ok(&self.get(chain)?.core)
    }

    pub fn rpc_url(&self, chain: &str) -> Result<Url> {
        Ok(self.get(chain)?.rpc_url.clone())
    }

    pub fn domain(&self, chain: &str) -> Result<u32> {
        Ok(self.get(chain)?.domain)
    }

    /// Native-token descriptor for a chain, falling back to ether when the
    /// chain does not register one.
    pub fn native_token(&self, chain: &str) -> Result<TokenMetadata> {
        Ok(self.get(chain)?.native_token.clone().unwrap_or_else(ether))
    }

    /// Registry of the testnets the built-in route sets target.
    pub fn testnets() -> Result<Self> {
        let registry = Self::default()
            .with_chain(
                "goerli",
                ChainEntry {
                    domain: 5,
                    rpc_url: Url::parse("https://rpc.ankr.com/eth_goerli")?,
                    core: CoreContracts {
                        mailbox: address!("cc737a94fecaec165abcf12ded095bb13f037685"),
                        multisig_ism: address!("8b05bf30f6247a90006c5837ea63c7905d79e6d8"),
                        default_igp: address!("f90cb82a76492614d07b82a7658917f3ac811ac1"),
                    },
                    native_token: None,
                },
            )
            .with_chain(
                "alfajores",
                ChainEntry {
                    domain: 44787,
                    rpc_url: Url::parse("https://alfajores-forno.celo-testnet.org")?,
                    core: CoreContracts {
                        mailbox: address!("cc737a94fecaec165abcf12ded095bb13f037685"),
                        multisig_ism: address!("ec0c1d4f68523cdaf1cd1f5ff89fcda2a1f998cc"),
                        default_igp: address!("f90cb82a76492614d07b82a7658917f3ac811ac1"),
                    },
                    native_token: Some(TokenMetadata {
                        name: "Celo".to_string(),
                        symbol: "CELO".to_string(),
                        decimals: 18,
                    }),
                },
            )
            .with_chain(
                "fuji",
                ChainEntry {
                    domain: 43113,
                    rpc_url: Url::parse("https://api.avax-test.network/ext/bc/C/rpc")?,
                    core: CoreContracts {
                        mailbox: address!("cc737a94fecaec165abcf12ded095bb13f037685"),
                        multisig_ism: address!("61a2b0a69b1ef2ad27524dd04011a2e648b11b08"),
                        default_igp: address!("f90cb82a76492614d07b82a7658917f3ac811ac1"),
                    },
                    native_token: Some(TokenMetadata {
                        name: "Avalanche".to_string(),
                        symbol: "AVAX".to_string(),
                        decimals: 18,
                    }),
                },
            );
        Ok(registry)
    }
}

/// Canonical descriptor for chains without a registered native token.
fn ether() -> TokenMetadata {
    TokenMetadata {
        name: "Ether".to_string(),
        symbol: "ETH".to_string(),
        decimals: 18,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_chain_is_an_error() {
        let registry = ChainRegistry::testnets().unwrap();
        let err = registry.get("unknownchain").unwrap_err();
        assert!(err.to_string().contains("unknownchain"));
    }

    #[test]
    fn native_token_falls_back_to_ether() {
        let registry = ChainRegistry::testnets().unwrap();
        // goerli registers no native token descriptor
        let eth = registry.native_token("goerli").unwrap();
        assert_eq!(eth.symbol, "ETH");
        assert_eq!(eth.decimals, 18);
        // alfajores does
        let celo = registry.native_token("alfajores").unwrap();
        assert_eq!(celo.symbol, "CELO");
    }
}
