//! Program client: reads the base account and submits GIF program calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChainClient` is what the portal sees. `RpcChainClient` implements it
//! over three narrower seams: an `RpcTransport` for JSON-RPC, the wallet's
//! `TransactionSigner`, and a `Cosigner` that adds the base account's
//! signature to `initialize`. Each seam is a trait so the whole submit path
//! runs in host tests.
//!
//! TRADE-OFFS
//! ==========
//! Confirmation is a bounded status poll. A transaction that lands after the
//! poll gives up is reported as `ConfirmationTimeout` even though it may
//! still succeed; the user's next refresh shows the truth.

#[cfg(test)]
#[path = "chain_test.rs"]
mod chain_test;

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use program::{BaseAccount, Instruction, Message, Pubkey, Signature, Transaction, WireError, instruction, transaction};

use super::rpc::{self, RpcTransport};
use super::types::{Commitment, PortalConfig};
use super::wallet::{TransactionSigner, WalletError};

/// Number of status polls before giving up on confirmation.
pub const DEFAULT_CONFIRM_ATTEMPTS: u32 = 30;
/// Delay between status polls.
pub const DEFAULT_CONFIRM_INTERVAL: Duration = Duration::from_millis(500);

/// Errors produced by program client operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChainError {
    /// The RPC endpoint could not be reached.
    #[error("transport failed: {0}")]
    Transport(String),
    /// The RPC endpoint returned a JSON-RPC error.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    /// The RPC response did not have the expected shape.
    #[error("invalid rpc response: {0}")]
    InvalidResponse(String),
    /// The account exists but is not a GIF list owned by the program.
    #[error("invalid account: {0}")]
    InvalidAccount(String),
    /// Building or encoding a transaction failed.
    #[error("encoding failed: {0}")]
    Wire(#[from] WireError),
    /// The wallet declined or failed to sign.
    #[error("signing failed: {0}")]
    Signing(#[from] WalletError),
    /// The server refused to co-sign.
    #[error("co-sign refused: {0}")]
    Cosign(String),
    /// The transaction executed and failed.
    #[error("transaction {signature} failed: {reason}")]
    TransactionFailed { signature: Signature, reason: String },
    /// The transaction was not confirmed within the poll budget.
    #[error("transaction {0} not confirmed in time")]
    ConfirmationTimeout(Signature),
}

/// Remote operations against the one base account.
#[async_trait(?Send)]
pub trait ChainClient {
    /// Create the base account, paid for and signed by `user`.
    async fn initialize(&self, user: &Pubkey) -> Result<Signature, ChainError>;

    /// Append `gif_link` to the list on behalf of `user`.
    async fn add_gif(&self, user: &Pubkey, gif_link: &str) -> Result<Signature, ChainError>;

    /// Read the base account; `None` when it has not been created.
    async fn fetch_account(&self) -> Result<Option<BaseAccount>, ChainError>;
}

/// Supplies the base account's signature for an `initialize` message.
#[async_trait(?Send)]
pub trait Cosigner {
    async fn cosign(&self, message: &[u8]) -> Result<Signature, ChainError>;
}

#[async_trait(?Send)]
impl<T: ChainClient + ?Sized> ChainClient for Rc<T> {
    async fn initialize(&self, user: &Pubkey) -> Result<Signature, ChainError> {
        (**self).initialize(user).await
    }

    async fn add_gif(&self, user: &Pubkey, gif_link: &str) -> Result<Signature, ChainError> {
        (**self).add_gif(user, gif_link).await
    }

    async fn fetch_account(&self) -> Result<Option<BaseAccount>, ChainError> {
        (**self).fetch_account().await
    }
}

/// `ChainClient` over JSON-RPC.
pub struct RpcChainClient<T, S, C> {
    transport: T,
    signer: S,
    cosigner: C,
    program_id: Pubkey,
    base_account: Pubkey,
    commitment: Commitment,
    confirm_attempts: u32,
    confirm_interval: Duration,
}

impl<T, S, C> RpcChainClient<T, S, C>
where
    T: RpcTransport,
    S: TransactionSigner,
    C: Cosigner,
{
    pub fn new(transport: T, signer: S, cosigner: C, config: &PortalConfig) -> Self {
        Self {
            transport,
            signer,
            cosigner,
            program_id: config.program_id,
            base_account: config.base_account,
            commitment: config.commitment,
            confirm_attempts: DEFAULT_CONFIRM_ATTEMPTS,
            confirm_interval: DEFAULT_CONFIRM_INTERVAL,
        }
    }

    /// Override the confirmation poll budget.
    #[must_use]
    pub fn with_confirmation(mut self, attempts: u32, interval: Duration) -> Self {
        self.confirm_attempts = attempts;
        self.confirm_interval = interval;
        self
    }

    async fn submit(&self, ix: Instruction, payer: &Pubkey, needs_cosign: bool) -> Result<Signature, ChainError> {
        let result = self
            .transport
            .call("getLatestBlockhash", rpc::latest_blockhash_params(self.commitment))
            .await?;
        let blockhash = rpc::parse_latest_blockhash(&result)?;
        let message = Message::new_with_blockhash(&[ix], Some(payer), &blockhash);
        let message_bytes = message.serialize();
        let mut tx = Transaction::new_unsigned(message);

        // Co-sign before the wallet prompt.
        if needs_cosign {
            let base_sig = self.cosigner.cosign(&message_bytes).await?;
            transaction::attach_signature(&mut tx, &self.base_account, base_sig)?;
        }
        let user_sig = self.signer.sign_message(&message_bytes).await?;
        transaction::attach_signature(&mut tx, payer, user_sig)?;

        let missing = transaction::missing_signers(&tx);
        if !missing.is_empty() {
            let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
            return Err(ChainError::Cosign(format!("missing signatures for {}", missing.join(", "))));
        }

        let wire = transaction::encode(&tx)?;
        let result = self
            .transport
            .call("sendTransaction", rpc::send_transaction_params(&wire, self.commitment))
            .await?;
        let signature = rpc::parse_signature(&result)?;
        self.confirm(signature).await?;
        Ok(signature)
    }

    async fn confirm(&self, signature: Signature) -> Result<(), ChainError> {
        for attempt in 0..self.confirm_attempts {
            if attempt > 0 {
                self.transport.wait(self.confirm_interval).await;
            }
            let result = self
                .transport
                .call("getSignatureStatuses", rpc::signature_status_params(&signature))
                .await?;
            match rpc::parse_signature_status(&result)? {
                Some(status) if status.err.is_some() => {
                    let reason = status.err.map(|e| e.to_string()).unwrap_or_default();
                    return Err(ChainError::TransactionFailed { signature, reason });
                }
                Some(status) if status.confirmation >= self.commitment => return Ok(()),
                _ => {}
            }
        }
        Err(ChainError::ConfirmationTimeout(signature))
    }
}

#[async_trait(?Send)]
impl<T, S, C> ChainClient for RpcChainClient<T, S, C>
where
    T: RpcTransport,
    S: TransactionSigner,
    C: Cosigner,
{
    async fn initialize(&self, user: &Pubkey) -> Result<Signature, ChainError> {
        let ix = instruction::initialize(&self.program_id, &self.base_account, user);
        self.submit(ix, user, true).await
    }

    async fn add_gif(&self, user: &Pubkey, gif_link: &str) -> Result<Signature, ChainError> {
        let ix = instruction::add_gif(&self.program_id, &self.base_account, user, gif_link)?;
        self.submit(ix, user, false).await
    }

    async fn fetch_account(&self) -> Result<Option<BaseAccount>, ChainError> {
        let result = self
            .transport
            .call("getAccountInfo", rpc::account_info_params(&self.base_account, self.commitment))
            .await?;
        let Some(info) = rpc::parse_account_info(&result)? else {
            return Ok(None);
        };
        // A funded but unallocated address is still owned by the system program.
        if info.owner == program::SYSTEM_PROGRAM_ID {
            return Ok(None);
        }
        if info.owner != self.program_id {
            return Err(ChainError::InvalidAccount(format!("account is owned by {}", info.owner)));
        }
        BaseAccount::decode(&info.data)
            .map(Some)
            .map_err(|e| ChainError::InvalidAccount(e.to_string()))
    }
}
