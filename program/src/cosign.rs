//! Base-account co-signing policy.
//!
//! The base account's secret stays on the server. The browser builds the
//! `initialize` message and asks the server to add the base account's
//! signature. The server signs only a message that does exactly one thing:
//! invoke `initialize` on the configured program with the configured base
//! account, paid for by someone else.

#[cfg(test)]
#[path = "cosign_test.rs"]
mod cosign_test;

use crate::instruction::{INITIALIZE, instruction_discriminator};
use crate::{Keypair, Message, Pubkey, SYSTEM_PROGRAM_ID, Signature, Signer, WireError, message};

/// Why a message was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CosignRejection {
    #[error("message could not be parsed: {0}")]
    Malformed(#[from] WireError),
    #[error("base account may not pay fees")]
    BaseAccountIsPayer,
    #[error("expected exactly one instruction, found {0}")]
    InstructionCount(usize),
    #[error("instruction targets {0}, not the portal program")]
    WrongProgram(Pubkey),
    #[error("instruction is not initialize")]
    NotInitialize,
    #[error("initialize accounts do not match the base account layout")]
    AccountLayout,
}

/// Check that `message` is a lone `initialize` call for `base_account`.
///
/// # Errors
///
/// Returns the first [`CosignRejection`] that applies.
pub fn check_initialize(message: &Message, program_id: &Pubkey, base_account: &Pubkey) -> Result<(), CosignRejection> {
    if message.account_keys.first() == Some(base_account) {
        return Err(CosignRejection::BaseAccountIsPayer);
    }
    let [ix] = message.instructions.as_slice() else {
        return Err(CosignRejection::InstructionCount(message.instructions.len()));
    };
    let target = message.program_id(0).copied().unwrap_or_default();
    if target != *program_id {
        return Err(CosignRejection::WrongProgram(target));
    }
    if ix.data != instruction_discriminator(INITIALIZE) {
        return Err(CosignRejection::NotInitialize);
    }

    let key = |pos: usize| {
        let index = usize::from(*ix.accounts.get(pos)?);
        message.account_keys.get(index).map(|k| (index, *k))
    };
    let layout_ok = match (key(0), key(2)) {
        (Some((base_index, base)), Some((_, system))) => {
            ix.accounts.len() == 3
                && base == *base_account
                && message.is_signer(base_index)
                && message.is_maybe_writable(base_index, None)
                && system == SYSTEM_PROGRAM_ID
        }
        _ => false,
    };
    if !layout_ok {
        return Err(CosignRejection::AccountLayout);
    }
    Ok(())
}

/// Parse, check and sign a serialized `initialize` message.
///
/// # Errors
///
/// Returns a [`CosignRejection`] when the bytes are not an acceptable
/// `initialize` message for `signer`'s account.
pub fn cosign_initialize(signer: &Keypair, program_id: &Pubkey, message_bytes: &[u8]) -> Result<Signature, CosignRejection> {
    let message = message::decode(message_bytes)?;
    check_initialize(&message, program_id, &signer.pubkey())?;
    Ok(signer.sign_message(message_bytes))
}
