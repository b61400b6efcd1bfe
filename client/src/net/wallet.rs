//! Wallet capability seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser wallet is an injected global. These traits let the portal
//! depend on what it needs from it (connect, sign) so tests can substitute
//! fakes and the hydrate build can plug in `PhantomWallet`.

use std::rc::Rc;

use async_trait::async_trait;
use program::{Pubkey, Signature};

use crate::state::wallet::ConnectMode;

/// Errors surfaced by a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    /// No compatible wallet is injected into the page.
    #[error("no wallet provider found")]
    Unavailable,
    /// The user declined, or the site is not trusted for a silent connect.
    #[error("wallet rejected the request: {0}")]
    Rejected(String),
    /// The wallet answered with something that could not be interpreted.
    #[error("unexpected wallet response: {0}")]
    InvalidResponse(String),
}

/// Connects to the user's wallet and reports its public key.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Whether a compatible wallet is present at all.
    fn is_available(&self) -> bool;

    /// Request the wallet's public key.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Rejected`] when the user declines or, in
    /// [`ConnectMode::OnlyIfTrusted`], when the site is not yet trusted.
    async fn connect(&self, mode: ConnectMode) -> Result<Pubkey, WalletError>;
}

/// Signs serialized transaction messages with the connected wallet's key.
#[async_trait(?Send)]
pub trait TransactionSigner {
    /// Sign `message` (a serialized legacy message) and return the signature.
    ///
    /// # Errors
    ///
    /// Returns a [`WalletError`] if the user declines or the wallet fails.
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError>;
}

#[async_trait(?Send)]
impl<T: WalletProvider + ?Sized> WalletProvider for Rc<T> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    async fn connect(&self, mode: ConnectMode) -> Result<Pubkey, WalletError> {
        (**self).connect(mode).await
    }
}

#[async_trait(?Send)]
impl<T: TransactionSigner + ?Sized> TransactionSigner for Rc<T> {
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        (**self).sign_message(message).await
    }
}
