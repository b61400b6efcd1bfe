//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server serializes these and the browser deserializes them, so both
//! sides compile against one definition.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use program::{Pubkey, Signature};
use serde::{Deserialize, Serialize};

/// How settled a transaction or read must be before it counts.
///
/// Ordered from weakest to strongest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    #[default]
    Processed,
    Confirmed,
    Finalized,
}

impl Commitment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Commitment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "processed" => Ok(Self::Processed),
            "confirmed" => Ok(Self::Confirmed),
            "finalized" => Ok(Self::Finalized),
            other => Err(format!("unknown commitment '{other}'")),
        }
    }
}

/// Public runtime configuration served at `/api/config`.
///
/// Contains no secrets: the base account's key stays on the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Cluster label shown in the page header (e.g. `devnet`).
    pub cluster: String,
    /// JSON-RPC endpoint for reads and transaction submission.
    pub rpc_url: String,
    #[serde(with = "program::b58")]
    pub program_id: Pubkey,
    /// Address of the account holding the GIF list.
    #[serde(with = "program::b58")]
    pub base_account: Pubkey,
    #[serde(default)]
    pub commitment: Commitment,
}

/// Body of `POST /api/base-account/cosign`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosignRequest {
    /// Base64 of the serialized legacy message.
    pub message: String,
}

/// Successful co-sign response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CosignResponse {
    #[serde(with = "program::b58")]
    pub signature: Signature,
}

/// Error body returned by API routes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}
