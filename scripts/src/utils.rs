//! Utilities for the creation scripts.

use std::{
    fs,
    path::Path,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use alloy::{
    primitives::{Bytes, U256},
    signers::local::PrivateKeySigner,
};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ScriptError;

/// Read and deserialize a JSON file
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, ScriptError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ScriptError::ReadFile(format!("{}: {}", path.display(), e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| ScriptError::Serde(format!("{}: {}", path.display(), e)))
}

/// Serialize a value into a pretty-printed JSON file, replacing its contents
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), ScriptError> {
    let contents =
        serde_json::to_string_pretty(value).map_err(|e| ScriptError::Serde(e.to_string()))?;

    fs::write(path, contents)
        .map_err(|e| ScriptError::WriteFile(format!("{}: {}", path.display(), e)))
}

/// A factory nonce derived from the wall clock, in milliseconds since the Unix epoch
///
/// Two invocations within the same millisecond produce the same nonce.
pub fn wall_clock_nonce() -> Result<U256, ScriptError> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| ScriptError::Config(e.to_string()))?
        .as_millis();

    Ok(U256::from(millis))
}

/// Parse the deployer's private key
pub fn parse_signer(priv_key: &str) -> Result<PrivateKeySigner, ScriptError> {
    PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
}

/// Parse an unsigned integer, in decimal or `0x`-prefixed hex
pub fn parse_u256(raw: &str, what: &str) -> Result<U256, ScriptError> {
    U256::from_str(raw.trim()).map_err(|e| ScriptError::Config(format!("{what} {raw}: {e}")))
}

/// Parse hex encoded bytes, with or without a `0x` prefix
pub fn parse_hex_bytes(raw: &str, what: &str) -> Result<Bytes, ScriptError> {
    Bytes::from_str(raw.trim()).map_err(|e| ScriptError::Config(format!("{what} {raw}: {e}")))
}
