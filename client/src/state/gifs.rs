//! GIF list state.
//!
//! DESIGN
//! ======
//! "Not created yet", "empty" and "could not load" are separate variants so
//! the view can pick a branch for each instead of inferring it from `None`.
//! An empty list is `Loaded(vec![])`.

#[cfg(test)]
#[path = "gifs_test.rs"]
mod gifs_test;

use program::GifEntry;

use crate::net::chain::ChainError;

/// Result of the most recent list fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GifListState {
    /// No fetch has completed yet.
    #[default]
    Pending,
    /// The base account does not exist on chain.
    NotInitialized,
    /// The account's list, verbatim and in on-chain order.
    Loaded(Vec<GifEntry>),
    /// The last fetch failed.
    Failed(FetchFailure),
}

impl GifListState {
    /// Entries to render; empty for every state except `Loaded`.
    #[must_use]
    pub fn items(&self) -> &[GifEntry] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Why a list fetch failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchFailure {
    /// The RPC endpoint could not be reached or answered garbage.
    Unreachable(String),
    /// The RPC endpoint returned a JSON-RPC error.
    Rpc { code: i64, message: String },
    /// The account exists but is not a readable GIF list.
    InvalidAccount(String),
}

impl FetchFailure {
    /// One-line text for the initialize panel.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::Unreachable(reason) => format!("Could not reach the cluster: {reason}"),
            Self::Rpc { code, message } => format!("Cluster returned error {code}: {message}"),
            Self::InvalidAccount(reason) => format!("The GIF account could not be read: {reason}"),
        }
    }
}

impl From<&ChainError> for FetchFailure {
    fn from(err: &ChainError) -> Self {
        match err {
            ChainError::Rpc { code, message } => Self::Rpc { code: *code, message: message.clone() },
            ChainError::InvalidAccount(reason) => Self::InvalidAccount(reason.clone()),
            other => Self::Unreachable(other.to_string()),
        }
    }
}
