use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role a router plays in a warp route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Native,
    Collateral,
    Synthetic,
}

/// Optional per-token overrides for the chain's core contracts. Anything
/// left unset falls back to the registry entry for that chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionConfig {
    pub mailbox: Option<Address>,
    pub interchain_security_module: Option<Address>,
    pub interchain_gas_paymaster: Option<Address>,
}

/// One origin-chain token backing the route. The variant decides which
/// fields exist: a collateral token always carries its contract address.
#[derive(Debug, Clone, PartialEq)]
pub enum BaseTokenConfig {
    Native {
        chain_name: String,
        connection: ConnectionConfig,
    },
    Collateral {
        chain_name: String,
        address: Address,
        connection: ConnectionConfig,
    },
}

impl BaseTokenConfig {
    pub fn chain_name(&self) -> &str {
        match self {
            Self::Native { chain_name, .. } | Self::Collateral { chain_name, .. } => chain_name,
        }
    }

    pub fn connection(&self) -> &ConnectionConfig {
        match self {
            Self::Native { connection, .. } | Self::Collateral { connection, .. } => connection,
        }
    }

    pub fn token_type(&self) -> TokenType {
        match self {
            Self::Native { .. } => TokenType::Native,
            Self::Collateral { .. } => TokenType::Collateral,
        }
    }

    /// Token contract address, with the zero-address sentinel for native.
    pub fn token_address(&self) -> Address {
        match self {
            Self::Native { .. } => Address::ZERO,
            Self::Collateral { address, .. } => *address,
        }
    }
}

/// The minted representation on a destination chain. Name and symbol are
/// inherited from the first base token's on-chain metadata when unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyntheticTokenConfig {
    pub chain_name: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub total_supply: Option<u64>,
    pub connection: ConnectionConfig,
}

/// One base token bridged to one or more synthetics.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpRouteConfig {
    pub base: BaseTokenConfig,
    pub synthetics: Vec<SyntheticTokenConfig>,
}

/// Several collateral/native bases feeding a single synthetic.
#[derive(Debug, Clone, PartialEq)]
pub struct WarpRouteMultiCollateralConfig {
    pub bases: Vec<BaseTokenConfig>,
    pub synthetic: SyntheticTokenConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid warp route config: {path} => {reason}")]
pub struct ValidationError {
    pub path: String,
    pub reason: String,
}

impl ValidationError {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

fn check_base(base: &BaseTokenConfig, path: &str) -> Result<(), ValidationError> {
    if base.chain_name().is_empty() {
        return Err(ValidationError::new(
            format!("{path}.chainName"),
            "chain name must not be empty",
        ));
    }
    if let BaseTokenConfig::Collateral { address, .. } = base {
        if *address == Address::ZERO {
            return Err(ValidationError::new(
                format!("{path}.address"),
                "collateral token address must not be the zero address",
            ));
        }
    }
    Ok(())
}

fn check_synthetic(synthetic: &SyntheticTokenConfig, path: &str) -> Result<(), ValidationError> {
    if synthetic.chain_name.is_empty() {
        return Err(ValidationError::new(
            format!("{path}.chainName"),
            "chain name must not be empty",
        ));
    }
    Ok(())
}

impl WarpRouteConfig {
    /// Structural validation, first failure wins. No I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_base(&self.base, "base")?;
        if self.synthetics.is_empty() {
            return Err(ValidationError::new(
                "synthetics",
                "at least one synthetic token is required",
            ));
        }
        for (i, synthetic) in self.synthetics.iter().enumerate() {
            check_synthetic(synthetic, &format!("synthetics[{i}]"))?;
        }
        Ok(())
    }

    /// All chains the route touches, base first, synthetics in declaration
    /// order.
    pub fn chains(&self) -> Vec<&str> {
        std::iter::once(self.base.chain_name())
            .chain(self.synthetics.iter().map(|s| s.chain_name.as_str()))
            .collect()
    }
}

impl WarpRouteMultiCollateralConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bases.is_empty() {
            return Err(ValidationError::new(
                "bases",
                "at least one base token is required",
            ));
        }
        for (i, base) in self.bases.iter().enumerate() {
            check_base(base, &format!("bases[{i}]"))?;
        }
        check_synthetic(&self.synthetic, "synthetic")
    }

    /// All chains the route touches, bases in declaration order, the
    /// synthetic chain last.
    pub fn chains(&self) -> Vec<&str> {
        self.bases
            .iter()
            .map(|b| b.chain_name())
            .chain(std::iter::once(self.synthetic.chain_name.as_str()))
            .collect()
    }
}

/// Either route shape, as selected on the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteConfig {
    Single(WarpRouteConfig),
    MultiCollateral(WarpRouteMultiCollateralConfig),
}

impl RouteConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Single(config) => config.validate(),
            Self::MultiCollateral(config) => config.validate(),
        }
    }

    pub fn chains(&self) -> Vec<&str> {
        match self {
            Self::Single(config) => config.chains(),
            Self::MultiCollateral(config) => config.chains(),
        }
    }

    /// Normalizes both shapes into the form the deployer works on.
    pub fn into_plan(self) -> DeploymentPlan {
        match self {
            Self::Single(config) => DeploymentPlan {
                bases: vec![config.base],
                synthetics: config.synthetics,
            },
            Self::MultiCollateral(config) => DeploymentPlan {
                bases: config.bases,
                synthetics: vec![config.synthetic],
            },
        }
    }
}

/// N bases plus M synthetics, shape-agnostic.
#[derive(Debug, Clone, PartialEq)]
pub struct DeploymentPlan {
    pub bases: Vec<BaseTokenConfig>,
    pub synthetics: Vec<SyntheticTokenConfig>,
}
