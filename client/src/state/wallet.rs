//! Wallet connection state.
//!
//! There is no disconnect path: once a connect attempt succeeds the page
//! stays connected until reload.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use program::Pubkey;

/// Whether a wallet has granted this page its public key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalletConnectionState {
    #[default]
    Disconnected,
    Connected(Pubkey),
}

impl WalletConnectionState {
    /// The connected wallet address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&Pubkey> {
        match self {
            Self::Connected(address) => Some(address),
            Self::Disconnected => None,
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

/// How a connect request should treat an untrusted site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectMode {
    /// Succeed only if the user already trusts this site; never prompt.
    OnlyIfTrusted,
    /// Show the wallet's approval prompt.
    Interactive,
}
