use std::{collections::BTreeMap, path::PathBuf};

use alloy::primitives::{Address, U256};
use eyre::{OptionExt, Result};
use tracing::{debug, info};

use crate::{
    artifacts::{self, WarpRouteArtifacts},
    chain::MultiProvider,
    config::{BaseTokenConfig, DeploymentPlan, RouteConfig, TokenType},
    metadata::{fetch_erc20_metadata, TokenMetadata},
    registry::ChainRegistry,
    router::HypRouterDeployer,
};

/// Fully resolved per-chain router configuration, ready for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTokenConfig {
    pub token_type: TokenType,
    /// Token contract backing the router; zero for native and synthetic.
    pub token: Address,
    pub owner: Address,
    pub mailbox: Address,
    pub interchain_security_module: Address,
    pub interchain_gas_paymaster: Address,
    /// Mint parameters, synthetic routers only.
    pub synthetic: Option<SyntheticMint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticMint {
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
}

pub struct WarpRouteDeployer {
    providers: MultiProvider,
    artifacts_dir: PathBuf,
    contracts_dir: PathBuf,
}

impl WarpRouteDeployer {
    pub fn new(providers: MultiProvider, artifacts_dir: PathBuf, contracts_dir: PathBuf) -> Self {
        Self {
            providers,
            artifacts_dir,
            contracts_dir,
        }
    }

    pub async fn deploy(&self, route: RouteConfig) -> Result<()> {
        route.validate()?;
        let plan = route.into_plan();
        let config_map = self.build_router_config(&plan).await?;

        info!("initiating hyp router deployments");
        let router_deployer = HypRouterDeployer::new(&self.providers, &self.contracts_dir);
        let routers = router_deployer.deploy(&config_map).await?;
        info!("hyp router deployments complete");

        self.write_deployment_result(&routers, &config_map)
    }

    async fn build_router_config(
        &self,
        plan: &DeploymentPlan,
    ) -> Result<BTreeMap<String, ChainTokenConfig>> {
        let mut base_metadata = Vec::with_capacity(plan.bases.len());
        for base in &plan.bases {
            let metadata = self.token_metadata(base).await?;
            info!(
                chain = base.chain_name(),
                name = %metadata.name,
                symbol = %metadata.symbol,
                decimals = metadata.decimals,
                "resolved base token metadata",
            );
            base_metadata.push(metadata);
        }

        let owner = self.providers.signer_address();
        assemble_config_map(plan, &base_metadata, owner, self.providers.registry())
    }

    async fn token_metadata(&self, base: &BaseTokenConfig) -> Result<TokenMetadata> {
        match base {
            BaseTokenConfig::Native { chain_name, .. } => {
                self.providers.registry().native_token(chain_name)
            }
            BaseTokenConfig::Collateral {
                chain_name,
                address,
                ..
            } => {
                let provider = self.providers.read_provider(chain_name)?;
                fetch_erc20_metadata(provider, *address).await
            }
        }
    }

    fn write_deployment_result(
        &self,
        routers: &BTreeMap<String, Address>,
        config_map: &BTreeMap<String, ChainTokenConfig>,
    ) -> Result<()> {
        let entries = routers
            .iter()
            .map(|(chain, router)| {
                let token_type = config_map
                    .get(chain)
                    .ok_or_eyre("deployed chain missing from config map")?
                    .token_type;
                Ok((
                    chain.clone(),
                    WarpRouteArtifacts {
                        router: *router,
                        token_type,
                    },
                ))
            })
            .collect::<Result<BTreeMap<_, _>>>()?;
        info!(
            dir = %self.artifacts_dir.display(),
            file = artifacts::TOKEN_ADDRESSES_FILE,
            "writing token deployment addresses",
        );
        artifacts::merge_json(&self.artifacts_dir, artifacts::TOKEN_ADDRESSES_FILE, &entries)
    }
}

/// Pure assembly of the per-chain router config map. `base_metadata[i]`
/// belongs to `plan.bases[i]`; synthetic name and symbol default to the
/// first base token's metadata, total supply to zero.
pub fn assemble_config_map(
    plan: &DeploymentPlan,
    base_metadata: &[TokenMetadata],
    owner: Address,
    registry: &ChainRegistry,
) -> Result<BTreeMap<String, ChainTokenConfig>> {
    let mut map = BTreeMap::new();

    for base in &plan.bases {
        let chain = base.chain_name();
        let core = registry.core(chain)?;
        let connection = base.connection();
        let config = ChainTokenConfig {
            token_type: base.token_type(),
            token: base.token_address(),
            owner,
            mailbox: connection.mailbox.unwrap_or(core.mailbox),
            interchain_security_module: connection
                .interchain_security_module
                .unwrap_or(core.multisig_ism),
            interchain_gas_paymaster: connection
                .interchain_gas_paymaster
                .unwrap_or(core.default_igp),
            synthetic: None,
        };
        debug!(chain, config = ?config, "assembled base router config");
        map.insert(chain.to_string(), config);
    }

    let first = base_metadata.first().ok_or_eyre("route has no base tokens")?;
    for synthetic in &plan.synthetics {
        let chain = synthetic.chain_name.as_str();
        let core = registry.core(chain)?;
        let connection = &synthetic.connection;
        let config = ChainTokenConfig {
            token_type: TokenType::Synthetic,
            token: Address::ZERO,
            owner,
            mailbox: connection.mailbox.unwrap_or(core.mailbox),
            interchain_security_module: connection
                .interchain_security_module
                .unwrap_or(core.multisig_ism),
            interchain_gas_paymaster: connection
                .interchain_gas_paymaster
                .unwrap_or(core.default_igp),
            synthetic: Some(SyntheticMint {
                name: synthetic.name.clone().unwrap_or_else(|| first.name.clone()),
                symbol: synthetic
                    .symbol
                    .clone()
                    .unwrap_or_else(|| first.symbol.clone()),
                total_supply: U256::from(synthetic.total_supply.unwrap_or(0)),
            }),
        };
        debug!(chain, config = ?config, "assembled synthetic router config");
        map.insert(chain.to_string(), config);
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ConnectionConfig, SyntheticTokenConfig},
        registry::{ChainEntry, CoreContracts},
    };
    use alloy::primitives::address;
    use url::Url;

    const OWNER: Address = address!("00000000000000000000000000000000000000aa");

    fn fixture_entry(seed: u8) -> ChainEntry {
        ChainEntry {
            domain: seed as u32,
            rpc_url: Url::parse("http://localhost:8545").unwrap(),
            core: CoreContracts {
                mailbox: Address::repeat_byte(seed),
                multisig_ism: Address::repeat_byte(seed + 1),
                default_igp: Address::repeat_byte(seed + 2),
            },
            native_token: None,
        }
    }

    fn fixture_registry() -> ChainRegistry {
        ChainRegistry::default()
            .with_chain("origin", fixture_entry(0x10))
            .with_chain("destination", fixture_entry(0x20))
    }

    fn usdc_metadata() -> TokenMetadata {
        TokenMetadata {
            name: "USD Coin".to_string(),
            symbol: "USDC".to_string(),
            decimals: 6,
        }
    }

    fn plan_with_synthetic(synthetic: SyntheticTokenConfig) -> DeploymentPlan {
        DeploymentPlan {
            bases: vec![BaseTokenConfig::Collateral {
                chain_name: "origin".to_string(),
                address: Address::repeat_byte(0x99),
                connection: ConnectionConfig::default(),
            }],
            synthetics: vec![synthetic],
        }
    }

    #[test]
    fn synthetic_defaults_come_from_first_base_metadata() {
        let plan = plan_with_synthetic(SyntheticTokenConfig {
            chain_name: "destination".to_string(),
            ..Default::default()
        });
        let map =
            assemble_config_map(&plan, &[usdc_metadata()], OWNER, &fixture_registry()).unwrap();

        let mint = map["destination"].synthetic.clone().unwrap();
        assert_eq!(mint.name, "USD Coin");
        assert_eq!(mint.symbol, "USDC");
        assert_eq!(mint.total_supply, U256::ZERO);
    }

    #[test]
    fn explicit_synthetic_fields_win_over_defaults() {
        let plan = plan_with_synthetic(SyntheticTokenConfig {
            chain_name: "destination".to_string(),
            name: Some("Wrapped USDC".to_string()),
            symbol: Some("wUSDC".to_string()),
            total_supply: Some(1_000),
            ..Default::default()
        });
        let map =
            assemble_config_map(&plan, &[usdc_metadata()], OWNER, &fixture_registry()).unwrap();

        let mint = map["destination"].synthetic.clone().unwrap();
        assert_eq!(mint.name, "Wrapped USDC");
        assert_eq!(mint.symbol, "wUSDC");
        assert_eq!(mint.total_supply, U256::from(1_000));
    }

    #[test]
    fn connection_overrides_beat_registry_defaults() {
        let override_mailbox = Address::repeat_byte(0xee);
        let plan = DeploymentPlan {
            bases: vec![BaseTokenConfig::Collateral {
                chain_name: "origin".to_string(),
                address: Address::repeat_byte(0x99),
                connection: ConnectionConfig {
                    mailbox: Some(override_mailbox),
                    ..Default::default()
                },
            }],
            synthetics: vec![SyntheticTokenConfig {
                chain_name: "destination".to_string(),
                ..Default::default()
            }],
        };
        let registry = fixture_registry();
        let map = assemble_config_map(&plan, &[usdc_metadata()], OWNER, &registry).unwrap();

        let origin = &map["origin"];
        assert_eq!(origin.mailbox, override_mailbox);
        // unset fields still resolve from the registry
        let core = registry.core("origin").unwrap();
        assert_eq!(origin.interchain_security_module, core.multisig_ism);
        assert_eq!(origin.interchain_gas_paymaster, core.default_igp);

        let destination = &map["destination"];
        let core = registry.core("destination").unwrap();
        assert_eq!(destination.mailbox, core.mailbox);
    }

    #[test]
    fn native_base_uses_zero_address_sentinel() {
        let plan = DeploymentPlan {
            bases: vec![BaseTokenConfig::Native {
                chain_name: "origin".to_string(),
                connection: ConnectionConfig::default(),
            }],
            synthetics: vec![SyntheticTokenConfig {
                chain_name: "destination".to_string(),
                ..Default::default()
            }],
        };
        let map =
            assemble_config_map(&plan, &[usdc_metadata()], OWNER, &fixture_registry()).unwrap();

        assert_eq!(map["origin"].token_type, TokenType::Native);
        assert_eq!(map["origin"].token, Address::ZERO);
        assert_eq!(map["origin"].owner, OWNER);
    }

    #[test]
    fn unknown_chain_fails_with_chain_name() {
        let plan = plan_with_synthetic(SyntheticTokenConfig {
            chain_name: "nowhere".to_string(),
            ..Default::default()
        });
        let err = assemble_config_map(&plan, &[usdc_metadata()], OWNER, &fixture_registry())
            .unwrap_err();
        assert!(err.to_string().contains("nowhere"));
    }
}
