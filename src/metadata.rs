use alloy::{primitives::Address, providers::Provider, transports::Transport};
use eyre::Result;
use futures_util::try_join;
use tracing::debug;

use crate::bindings::IERC20Metadata;

/// On-chain facts about a token, fetched live for ERC-20s and taken from the
/// registry descriptor for native assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Reads name, symbol and decimals from an ERC-20 contract. The three calls
/// go out together; if any of them fails the whole fetch fails.
pub async fn fetch_erc20_metadata<P, T>(provider: P, token: Address) -> Result<TokenMetadata>
where
    P: Provider<T>,
    T: Transport + Clone,
{
    debug!(token = %token, "fetching erc20 metadata");
    let erc20 = IERC20Metadata::new(token, provider);
    let (name, symbol, decimals) = try_join!(
        async { erc20.name().call().await },
        async { erc20.symbol().call().await },
        async { erc20.decimals().call().await },
    )?;

    Ok(TokenMetadata {
        name: name._0,
        symbol: symbol._0,
        decimals: decimals._0,
    })
}
