//! Loading the base account's signing key from disk or the environment.
//!
//! Two JSON encodings are accepted: the `solana-keygen` array of 64 bytes
//! (secret half then public half), and the object form produced by
//! serializing a web3.js `Keypair`, where `_keypair.secretKey` is a map of
//! stringified indices to byte values.

#[cfg(test)]
#[path = "keypair_test.rs"]
mod keypair_test;

use serde_json::Value;
use solana_sdk::signer::keypair::keypair_from_seed;

use crate::{Keypair, WireError};

/// Length of a full keypair encoding (secret + public).
pub const KEYPAIR_LEN: usize = 64;

/// Parse a keypair from either supported JSON encoding.
///
/// # Errors
///
/// Returns [`WireError::Keypair`] when the text is not JSON, has neither
/// shape, or the bytes do not form a valid keypair.
pub fn from_json(text: &str) -> Result<Keypair, WireError> {
    let value: Value = serde_json::from_str(text).map_err(|e| WireError::Keypair(e.to_string()))?;
    let secret = match &value {
        Value::Array(_) => &value,
        Value::Object(map) => map
            .get("_keypair")
            .and_then(|k| k.get("secretKey"))
            .or_else(|| map.get("secretKey"))
            .ok_or_else(|| WireError::Keypair("missing secretKey".into()))?,
        _ => return Err(WireError::Keypair("expected array or object".into())),
    };
    from_bytes(&bytes_from_value(secret)?)
}

/// Build a keypair from 64 bytes of secret followed by public key.
///
/// # Errors
///
/// Returns [`WireError::Keypair`] for the wrong width or invalid key bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<Keypair, WireError> {
    if bytes.len() != KEYPAIR_LEN {
        return Err(WireError::Keypair(format!("expected {KEYPAIR_LEN} bytes, got {}", bytes.len())));
    }
    Keypair::try_from(bytes).map_err(|e| WireError::Keypair(e.to_string()))
}

/// Derive a keypair from a 32-byte secret seed.
///
/// # Errors
///
/// Returns [`WireError::Keypair`] if the seed is rejected.
pub fn from_seed(seed: &[u8; 32]) -> Result<Keypair, WireError> {
    keypair_from_seed(seed).map_err(|e| WireError::Keypair(e.to_string()))
}

/// Collect key bytes from a JSON array or an index-keyed object.
fn bytes_from_value(value: &Value) -> Result<Vec<u8>, WireError> {
    match value {
        Value::Array(items) => items.iter().map(byte_from_value).collect(),
        Value::Object(map) => {
            let mut indexed = map
                .iter()
                .map(|(k, v)| {
                    let index = k
                        .parse::<usize>()
                        .map_err(|_| WireError::Keypair(format!("non-numeric key index '{k}'")))?;
                    Ok::<_, WireError>((index, byte_from_value(v)?))
                })
                .collect::<Result<Vec<_>, WireError>>()?;
            indexed.sort_unstable_by_key(|(index, _)| *index);
            if indexed.iter().enumerate().any(|(pos, (index, _))| pos != *index) {
                return Err(WireError::Keypair("key indices are not contiguous".into()));
            }
            Ok(indexed.into_iter().map(|(_, byte)| byte).collect())
        }
        _ => Err(WireError::Keypair("secretKey must be an array or object".into())),
    }
}

fn byte_from_value(value: &Value) -> Result<u8, WireError> {
    value
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| WireError::Keypair(format!("not a byte: {value}")))
}
