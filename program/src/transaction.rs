//! Signature slots for transactions signed by more than one party.
//!
//! The user's wallet and the server each return a bare signature over the
//! serialized message. These helpers place them in the right slot and
//! encode the result for `sendTransaction`.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use crate::{Pubkey, Signature, Transaction, WireError};

/// Place `signature` in the slot belonging to `signer`.
///
/// # Errors
///
/// Returns [`WireError::NotASigner`] if `signer` is not a required signer.
pub fn attach_signature(tx: &mut Transaction, signer: &Pubkey, signature: Signature) -> Result<(), WireError> {
    let position = tx
        .get_signing_keypair_positions(&[*signer])
        .map_err(|e| WireError::Encode(e.to_string()))?
        .first()
        .copied()
        .flatten();
    let slot = position
        .and_then(|i| tx.signatures.get_mut(i))
        .ok_or(WireError::NotASigner(*signer))?;
    *slot = signature;
    Ok(())
}

/// Required signers whose slots are still empty.
#[must_use]
pub fn missing_signers(tx: &Transaction) -> Vec<Pubkey> {
    tx.signatures
        .iter()
        .zip(&tx.message.account_keys)
        .filter(|(sig, _)| **sig == Signature::default())
        .map(|(_, key)| *key)
        .collect()
}

/// Wire bytes for `sendTransaction`.
///
/// # Errors
///
/// Returns [`WireError::Encode`] if bincode fails.
pub fn encode(tx: &Transaction) -> Result<Vec<u8>, WireError> {
    bincode::serialize(tx).map_err(|e| WireError::Encode(e.to_string()))
}
