//! Instruction builders for the GIF program.
//!
//! The program exposes two instructions. Account order mirrors the program's
//! account structs and must not change:
//!
//! - `initialize`: `base_account` (writable, signer), `user` (writable,
//!   signer), `system_program`.
//! - `add_gif(gif_link: String)`: `base_account` (writable), `user`
//!   (writable, signer).

#[cfg(test)]
#[path = "instruction_test.rs"]
mod instruction_test;

use solana_sdk::hash::hash;

use crate::{AccountMeta, Instruction, Pubkey, SYSTEM_PROGRAM_ID, WireError};

/// Instruction name for one-time account creation.
pub const INITIALIZE: &str = "initialize";
/// Instruction name for appending a GIF link.
pub const ADD_GIF: &str = "add_gif";

/// First eight bytes of `sha256("{namespace}:{name}")`.
#[must_use]
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let digest = hash(format!("{namespace}:{name}").as_bytes()).to_bytes();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

/// Discriminator prefixed to an instruction's data.
#[must_use]
pub fn instruction_discriminator(name: &str) -> [u8; 8] {
    sighash("global", name)
}

/// Discriminator prefixed to an account's data.
#[must_use]
pub fn account_discriminator(name: &str) -> [u8; 8] {
    sighash("account", name)
}

/// Build the one-time `initialize` call. Both `base_account` and `user` sign.
#[must_use]
pub fn initialize(program_id: &Pubkey, base_account: &Pubkey, user: &Pubkey) -> Instruction {
    Instruction::new_with_bytes(
        *program_id,
        &instruction_discriminator(INITIALIZE),
        vec![
            AccountMeta::new(*base_account, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
    )
}

/// Build an `add_gif` call carrying `gif_link` as a borsh string.
///
/// # Errors
///
/// Returns [`WireError::Encode`] if the link cannot be borsh-encoded.
pub fn add_gif(program_id: &Pubkey, base_account: &Pubkey, user: &Pubkey, gif_link: &str) -> Result<Instruction, WireError> {
    let mut data = instruction_discriminator(ADD_GIF).to_vec();
    borsh::to_writer(&mut data, gif_link).map_err(|e| WireError::Encode(e.to_string()))?;
    Ok(Instruction::new_with_bytes(
        *program_id,
        &data,
        vec![AccountMeta::new(*base_account, false), AccountMeta::new(*user, true)],
    ))
}
