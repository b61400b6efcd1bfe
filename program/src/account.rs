//! The single program-owned account holding the GIF list.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::instruction::account_discriminator;
use crate::{Pubkey, WireError};

/// Anchor type name used to derive the account discriminator.
pub const BASE_ACCOUNT_NAME: &str = "BaseAccount";

/// One submitted link and the wallet that submitted it.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct GifEntry {
    pub gif_link: String,
    #[serde(with = "crate::b58")]
    pub user_address: Pubkey,
}

/// On-chain layout of the base account.
///
/// The account is allocated with fixed space, so decoded data is normally
/// followed by zero padding, which is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<GifEntry>,
}

impl BaseAccount {
    /// Decode raw account data, checking the discriminator.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::DiscriminatorMismatch`] when the data belongs to
    /// another account type, or a decode error when the body is malformed.
    pub fn decode(data: &[u8]) -> Result<Self, WireError> {
        if data.len() < 8 {
            return Err(WireError::Truncated("account discriminator"));
        }
        let (disc, mut body) = data.split_at(8);
        if disc != account_discriminator(BASE_ACCOUNT_NAME) {
            return Err(WireError::DiscriminatorMismatch);
        }
        <Self as BorshDeserialize>::deserialize(&mut body).map_err(|e| WireError::Decode(e.to_string()))
    }

    /// Encode with discriminator, without padding.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Encode`] if borsh serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut out = account_discriminator(BASE_ACCOUNT_NAME).to_vec();
        borsh::to_writer(&mut out, self).map_err(|e| WireError::Encode(e.to_string()))?;
        Ok(out)
    }
}
