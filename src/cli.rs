use std::path::PathBuf;

use alloy::signers::local::PrivateKeySigner;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RouteSet {
    /// One base token bridged to one or more synthetics.
    Single,
    /// Several collateral bases feeding a single synthetic.
    MultiCollateral,
}

#[derive(Debug, Parser)]
#[command(name = "warp-deploy", about = "Deploys warp route token routers")]
pub struct Args {
    /// A hexadecimal private key for transaction signing.
    #[arg(long, value_parser = parse_signing_key)]
    pub key: PrivateKeySigner,

    /// Which of the configured route sets to deploy.
    #[arg(long, value_enum, default_value = "single")]
    pub route: RouteSet,

    /// Directory the deployment artifact is written to.
    #[arg(long, default_value = "./artifacts")]
    pub artifacts_dir: PathBuf,

    /// Directory holding the compiled router contract artifacts.
    #[arg(long, default_value = "./contracts/out")]
    pub contracts_dir: PathBuf,
}

/// A signing key is exactly 32 hex-encoded bytes, `0x` prefix optional.
fn parse_signing_key(raw: &str) -> Result<PrivateKeySigner, String> {
    let stripped = raw.strip_prefix("0x").unwrap_or(raw);
    let bytes = hex::decode(stripped).map_err(|err| format!("key is not valid hex: {err}"))?;
    if bytes.len() != 32 {
        return Err(format!("key must be 32 bytes, got {}", bytes.len()));
    }
    PrivateKeySigner::from_slice(&bytes).map_err(|err| format!("invalid signing key: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn accepts_key_with_and_without_prefix() {
        let bare = parse_signing_key(KEY).unwrap();
        let prefixed = parse_signing_key(&format!("0x{KEY}")).unwrap();
        assert_eq!(bare.address(), prefixed.address());
    }

    #[test]
    fn rejects_short_key() {
        let err = parse_signing_key("0xabcd").unwrap_err();
        assert!(err.contains("32 bytes"));
    }

    #[test]
    fn rejects_non_hex_key() {
        assert!(parse_signing_key("not-a-key").is_err());
    }
}
