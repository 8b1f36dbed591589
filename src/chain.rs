use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::{
        utils::format_ether,
        Address, U256,
    },
    providers::{Provider, ProviderBuilder, RootProvider},
    signers::local::PrivateKeySigner,
    transports::http::{Client, Http},
};
use eyre::{ensure, Result};
use tracing::debug;

use crate::registry::ChainRegistry;

/// Minimum signer balance required on every chain a route touches, in wei
/// (0.05 of the native asset).
pub const MIN_DEPLOYER_BALANCE: U256 = U256::from_limbs([50_000_000_000_000_000, 0, 0, 0]);

/// Per-chain providers sharing one transaction signer.
pub struct MultiProvider {
    registry: ChainRegistry,
    signer: PrivateKeySigner,
}

impl MultiProvider {
    pub fn new(registry: ChainRegistry, signer: PrivateKeySigner) -> Self {
        Self { registry, signer }
    }

    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    pub fn signer_address(&self) -> Address {
        self.signer.address()
    }

    /// Read-only provider for one chain.
    pub fn read_provider(&self, chain: &str) -> Result<RootProvider<Http<Client>>> {
        let rpc_url = self.registry.rpc_url(chain)?;
        Ok(ProviderBuilder::new().on_http(rpc_url))
    }

    /// Provider with the shared signer attached, for transactions.
    pub fn signer_provider(&self, chain: &str) -> Result<impl Provider<Http<Client>, Ethereum>> {
        let rpc_url = self.registry.rpc_url(chain)?;
        let wallet = EthereumWallet::from(self.signer.clone());
        Ok(ProviderBuilder::new()
            .with_recommended_fillers()
            .wallet(wallet)
            .on_http(rpc_url))
    }

    /// Pre-flight: the signer must hold at least [`MIN_DEPLOYER_BALANCE`] on
    /// every listed chain before anything mutating goes out.
    pub async fn assert_balances(&self, chains: &[&str]) -> Result<()> {
        for chain in chains {
            let balance = self
                .read_provider(chain)?
                .get_balance(self.signer_address())
                .await?;
            debug!(chain, balance = %format_ether(balance), "checked deployer balance");
            ensure!(
                balance >= MIN_DEPLOYER_BALANCE,
                "insufficient balance on {chain}: have {}, need {}",
                format_ether(balance),
                format_ether(MIN_DEPLOYER_BALANCE),
            );
        }
        Ok(())
    }
}
