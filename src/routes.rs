use alloy::primitives::address;

use crate::config::{
    BaseTokenConfig, ConnectionConfig, SyntheticTokenConfig, WarpRouteConfig,
    WarpRouteMultiCollateralConfig,
};

// The route sets deployed by this tool. Chain names must resolve in the
// chain registry. Mailbox/ISM/IGP overrides on any token are optional; the
// registry defaults apply when unset.

/// `--route single`: USDC collateral on goerli, one synthetic on alfajores.
pub fn single_collateral() -> WarpRouteConfig {
    WarpRouteConfig {
        base: BaseTokenConfig::Collateral {
            chain_name: "goerli".to_string(),
            address: address!("07865c6e87b9f70255377e024ace6630c1eaa37f"),
            connection: ConnectionConfig::default(),
        },
        synthetics: vec![SyntheticTokenConfig {
            chain_name: "alfajores".to_string(),
            // name, symbol and total supply inherit from the base token
            ..Default::default()
        }],
    }
}

/// `--route multi-collateral`: USDC collateral on goerli and fuji feeding a
/// single synthetic on alfajores.
pub fn multi_collateral() -> WarpRouteMultiCollateralConfig {
    WarpRouteMultiCollateralConfig {
        bases: vec![
            BaseTokenConfig::Collateral {
                chain_name: "goerli".to_string(),
                address: address!("07865c6e87b9f70255377e024ace6630c1eaa37f"),
                connection: ConnectionConfig::default(),
            },
            BaseTokenConfig::Collateral {
                chain_name: "fuji".to_string(),
                address: address!("5425890298aed601595a70ab815c96711a31bc65"),
                connection: ConnectionConfig::default(),
            },
        ],
        synthetic: SyntheticTokenConfig {
            chain_name: "alfajores".to_string(),
            ..Default::default()
        },
    }
}
