//! Serde adapter for keys and signatures in JSON.
//!
//! The Solana types serialize as byte arrays. JSON-RPC and the portal API
//! carry them as base58 strings, so DTO fields use
//! `#[serde(with = "program::b58")]`.

#[cfg(test)]
#[path = "b58_test.rs"]
mod b58_test;

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};

/// Write `value` through its `Display` form.
///
/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Read a string and parse it with `FromStr`.
///
/// # Errors
///
/// Fails when the input is not a string or does not parse.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(serde::de::Error::custom)
}
