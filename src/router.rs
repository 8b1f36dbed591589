use std::{
    collections::BTreeMap,
    fs,
    path::Path,
};

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, B256},
    providers::Provider,
    rpc::types::TransactionRequest,
    sol_types::SolValue,
};
use eyre::{eyre, OptionExt, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    bindings::{IHypAdapter, IHypERC20, IHypRouter},
    chain::MultiProvider,
    config::TokenType,
    deployer::ChainTokenConfig,
};

// The fields read out of a Foundry build artifact.
#[derive(Deserialize)]
struct FoundryArtifact {
    bytecode: ArtifactBytecode,
}

#[derive(Deserialize)]
struct ArtifactBytecode {
    object: Bytes,
}

/// Deploys one Hyp router per configured chain and wires the routers to each
/// other: CREATE, the variant's initialize, ISM, remote enrollment. Treated
/// as atomic-or-failed by the orchestrator; there is no partial-result
/// handling or retry here.
pub struct HypRouterDeployer<'a> {
    providers: &'a MultiProvider,
    contracts_dir: &'a Path,
}

impl<'a> HypRouterDeployer<'a> {
    pub fn new(providers: &'a MultiProvider, contracts_dir: &'a Path) -> Self {
        Self {
            providers,
            contracts_dir,
        }
    }

    pub async fn deploy(
        &self,
        config_map: &BTreeMap<String, ChainTokenConfig>,
    ) -> Result<BTreeMap<String, Address>> {
        let mut routers = BTreeMap::new();
        for (chain, config) in config_map {
            let router = self.deploy_router(chain, config).await?;
            info!(chain, router = %router, token_type = ?config.token_type, "router deployed");
            routers.insert(chain.clone(), router);
        }
        self.enroll_remote_routers(&routers).await?;
        Ok(routers)
    }

    async fn deploy_router(&self, chain: &str, config: &ChainTokenConfig) -> Result<Address> {
        let provider = self.providers.signer_provider(chain)?;

        let mut code = self.load_bytecode(config.token_type)?.to_vec();
        if config.token_type == TokenType::Collateral {
            // constructor(address wrappedToken)
            code.extend(config.token.abi_encode());
        }
        let tx = TransactionRequest::default().with_deploy_code(code);
        let receipt = provider.send_transaction(tx).await?.get_receipt().await?;
        let router = receipt
            .contract_address
            .ok_or_eyre("deploy receipt carries no contract address")?;
        debug!(chain, router = %router, "router created, initializing");

        match config.token_type {
            TokenType::Synthetic => {
                let mint = config
                    .synthetic
                    .as_ref()
                    .ok_or_eyre("synthetic router config has no mint parameters")?;
                let contract = IHypERC20::new(router, &provider);
                contract
                    .initialize(
                        config.mailbox,
                        config.interchain_gas_paymaster,
                        mint.total_supply,
                        mint.name.clone(),
                        mint.symbol.clone(),
                    )
                    .send()
                    .await?
                    .watch()
                    .await?;
            }
            TokenType::Native | TokenType::Collateral => {
                let contract = IHypAdapter::new(router, &provider);
                contract
                    .initialize(config.mailbox, config.interchain_gas_paymaster)
                    .send()
                    .await?
                    .watch()
                    .await?;
            }
        }

        let admin = IHypRouter::new(router, &provider);
        admin
            .setInterchainSecurityModule(config.interchain_security_module)
            .send()
            .await?
            .watch()
            .await?;

        Ok(router)
    }

    /// Every router learns the domain and address of every other router in
    /// the route.
    async fn enroll_remote_routers(&self, routers: &BTreeMap<String, Address>) -> Result<()> {
        for (chain, router) in routers {
            let mut domains = Vec::new();
            let mut remotes = Vec::new();
            for (remote_chain, remote_router) in routers {
                if remote_chain == chain {
                    continue;
                }
                domains.push(self.providers.registry().domain(remote_chain)?);
                remotes.push(B256::left_padding_from(remote_router.as_slice()));
            }
            debug!(chain, remotes = domains.len(), "enrolling remote routers");

            let provider = self.providers.signer_provider(chain)?;
            let contract = IHypRouter::new(*router, &provider);
            contract
                .enrollRemoteRouters(domains, remotes)
                .send()
                .await?
                .watch()
                .await?;
        }
        Ok(())
    }

    fn load_bytecode(&self, token_type: TokenType) -> Result<Bytes> {
        let contract = match token_type {
            TokenType::Native => "HypNative",
            TokenType::Collateral => "HypERC20Collateral",
            TokenType::Synthetic => "HypERC20",
        };
        let path = self
            .contracts_dir
            .join(format!("{contract}.sol"))
            .join(format!("{contract}.json"));
        let raw = fs::read_to_string(&path)
            .map_err(|err| eyre!("cannot read router artifact {}: {err}", path.display()))?;
        let artifact: FoundryArtifact = serde_json::from_str(&raw)
            .map_err(|err| eyre!("malformed router artifact {}: {err}", path.display()))?;
        Ok(artifact.bytecode.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_foundry_artifact_bytecode() {
        let raw = r#"{"abi": [], "bytecode": {"object": "0x6080604052", "sourceMap": ""}}"#;
        let artifact: FoundryArtifact = serde_json::from_str(raw).unwrap();
        assert_eq!(
            artifact.bytecode.object,
            Bytes::from_static(&[0x60, 0x80, 0x60, 0x40, 0x52])
        );
    }

    #[test]
    fn remote_router_address_is_left_padded() {
        let router = Address::repeat_byte(0xab);
        let word = B256::left_padding_from(router.as_slice());
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(&word[12..], router.as_slice());
    }
}
