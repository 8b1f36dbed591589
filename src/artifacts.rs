use std::{collections::BTreeMap, fs, io, path::Path};

use alloy::primitives::Address;
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::config::TokenType;

pub const TOKEN_ADDRESSES_FILE: &str = "warp-token-addresses.json";

/// One deployed warp route side, as persisted in the artifact file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarpRouteArtifacts {
    pub router: Address,
    #[serde(rename = "tokenType")]
    pub token_type: TokenType,
}

/// Merges `entries` into the JSON map at `dir/file`. Keys that are not part
/// of this run survive; a re-deployed chain overwrites its own entry.
pub fn merge_json(
    dir: &Path,
    file: &str,
    entries: &BTreeMap<String, WarpRouteArtifacts>,
) -> Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file);
    let mut merged: BTreeMap<String, WarpRouteArtifacts> = match fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw)
            .wrap_err_with(|| format!("existing artifact file {} is not valid JSON", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => return Err(err.into()),
    };
    merged.extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
    fs::write(&path, serde_json::to_string_pretty(&merged)?)?;
    Ok(())
}
