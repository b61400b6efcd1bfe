//! Server configuration parsed from environment variables.
//!
//! `from_env` reads the process environment (after `dotenvy` has loaded any
//! `.env` file). `from_vars` takes the lookup as a function so tests never
//! touch process-global state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::types::{Commitment, PortalConfig};
use std::fmt;

use program::idl::ProgramDescriptor;
use program::{Keypair, Pubkey, Signer, keypair};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CLUSTER: &str = "devnet";

pub const PORT_VAR: &str = "PORT";
pub const CLUSTER_VAR: &str = "GIF_PORTAL_CLUSTER";
pub const PROGRAM_ID_VAR: &str = "GIF_PORTAL_PROGRAM_ID";
pub const IDL_PATH_VAR: &str = "GIF_PORTAL_IDL_PATH";
pub const BASE_KEYPAIR_VAR: &str = "GIF_PORTAL_BASE_KEYPAIR";
pub const BASE_KEYPAIR_PATH_VAR: &str = "GIF_PORTAL_BASE_KEYPAIR_PATH";
pub const COMMITMENT_VAR: &str = "GIF_PORTAL_COMMITMENT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither of the alternative variables is set.
    #[error("set {0} or {1}")]
    Missing(&'static str, &'static str),

    /// A variable is set but its value is unusable.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    /// A file named by a `*_PATH` variable could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct ServerConfig {
    pub port: u16,
    /// Public half, served at `/api/config`.
    pub portal: PortalConfig,
    /// Base account signer; `portal.base_account` is its public key.
    pub base_keypair: Keypair,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("portal", &self.portal)
            .field("base_keypair", &self.base_keypair.pubkey())
            .finish()
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `GIF_PORTAL_PROGRAM_ID`, or `GIF_PORTAL_IDL_PATH` pointing at the
    ///   program's Anchor IDL
    /// - `GIF_PORTAL_BASE_KEYPAIR` (keypair JSON), or
    ///   `GIF_PORTAL_BASE_KEYPAIR_PATH` pointing at a keypair file
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `GIF_PORTAL_CLUSTER`: `devnet` (default), `testnet`,
    ///   `mainnet-beta`, `localnet` or an `http(s)://` RPC URL
    /// - `GIF_PORTAL_COMMITMENT`: `processed` (default), `confirmed` or
    ///   `finalized`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable that is missing or
    /// invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// See [`Self::from_env`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match var(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: PORT_VAR, reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };

        let (cluster, rpc_url) = resolve_cluster(var(CLUSTER_VAR).as_deref().unwrap_or(DEFAULT_CLUSTER))?;
        let program_id = load_program_id(&var)?;
        let base_keypair = load_base_keypair(&var)?;
        let commitment = match var(COMMITMENT_VAR) {
            Some(raw) => raw
                .parse::<Commitment>()
                .map_err(|reason| ConfigError::Invalid { var: COMMITMENT_VAR, reason })?,
            None => Commitment::default(),
        };

        let portal = PortalConfig { cluster, rpc_url, program_id, base_account: base_keypair.pubkey(), commitment };
        Ok(Self { port, portal, base_keypair })
    }
}

/// Map a cluster name to its label and public RPC endpoint.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] for an unknown name that is not a URL.
pub fn resolve_cluster(name: &str) -> Result<(String, String), ConfigError> {
    let url = match name {
        "devnet" => "https://api.devnet.solana.com",
        "testnet" => "https://api.testnet.solana.com",
        "mainnet-beta" => "https://api.mainnet-beta.solana.com",
        "localnet" => "http://127.0.0.1:8899",
        custom if custom.starts_with("http://") || custom.starts_with("https://") => {
            return Ok(("custom".to_owned(), custom.trim_end_matches('/').to_owned()));
        }
        other => {
            return Err(ConfigError::Invalid { var: CLUSTER_VAR, reason: format!("unknown cluster '{other}'") });
        }
    };
    Ok((name.to_owned(), url.to_owned()))
}

fn load_program_id(var: &impl Fn(&str) -> Option<String>) -> Result<Pubkey, ConfigError> {
    if let Some(raw) = var(PROGRAM_ID_VAR) {
        return raw
            .trim()
            .parse::<Pubkey>()
            .map_err(|e| ConfigError::Invalid { var: PROGRAM_ID_VAR, reason: e.to_string() });
    }
    let path = var(IDL_PATH_VAR).ok_or(ConfigError::Missing(PROGRAM_ID_VAR, IDL_PATH_VAR))?;
    let text = read_file(&path)?;
    let descriptor = ProgramDescriptor::from_idl_json(&text)
        .map_err(|e| ConfigError::Invalid { var: IDL_PATH_VAR, reason: e.to_string() })?;
    tracing::debug!(program = %descriptor.name, program_id = %descriptor.program_id, "loaded program IDL");
    Ok(descriptor.program_id)
}

fn load_base_keypair(var: &impl Fn(&str) -> Option<String>) -> Result<Keypair, ConfigError> {
    if let Some(raw) = var(BASE_KEYPAIR_VAR) {
        return keypair::from_json(&raw)
            .map_err(|e| ConfigError::Invalid { var: BASE_KEYPAIR_VAR, reason: e.to_string() });
    }
    let path = var(BASE_KEYPAIR_PATH_VAR).ok_or(ConfigError::Missing(BASE_KEYPAIR_VAR, BASE_KEYPAIR_PATH_VAR))?;
    let text = read_file(&path)?;
    keypair::from_json(&text).map_err(|e| ConfigError::Invalid { var: BASE_KEYPAIR_PATH_VAR, reason: e.to_string() })
}

fn read_file(path: &str) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read { path: path.to_owned(), source })
}
