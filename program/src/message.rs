//! Decoding legacy transaction messages received from untrusted callers.
//!
//! ```text
//! header (3 x u8) | shortvec keys | keys (32 each) | blockhash (32)
//!   | shortvec instructions | per instruction:
//!       program_id_index (u8) | shortvec + account indices | shortvec + data
//! ```
//!
//! Input is capped at one packet. The key and instruction counts are read
//! with the compact-u16 decoder and checked against the bytes that follow
//! before bincode sizes any vector from them.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use bincode::Options;
use solana_sdk::packet::PACKET_DATA_SIZE;
use solana_sdk::sanitize::Sanitize;
use solana_sdk::short_vec::decode_shortu16_len;

use crate::{Message, WireError};

const HEADER_LEN: usize = 3;
const KEY_LEN: usize = 32;
const BLOCKHASH_LEN: usize = 32;
/// Program index plus two empty length prefixes.
const MIN_INSTRUCTION_LEN: usize = 3;

/// Parse and sanitize a serialized legacy message.
///
/// Trailing bytes are rejected: a signature covers exactly the bytes given.
///
/// # Errors
///
/// - [`WireError::TooLarge`] above [`PACKET_DATA_SIZE`].
/// - [`WireError::LengthPrefix`] for a malformed or out-of-range count.
/// - [`WireError::Truncated`] when a count promises more than remains.
/// - [`WireError::Decode`] for any other layout error.
/// - [`WireError::Inconsistent`] when indices or header counts exceed the
///   account list.
pub fn decode(bytes: &[u8]) -> Result<Message, WireError> {
    if bytes.len() > PACKET_DATA_SIZE {
        return Err(WireError::TooLarge(bytes.len()));
    }
    check_counts(bytes)?;
    let message: Message = bincode::options()
        .with_limit(PACKET_DATA_SIZE as u64)
        .with_fixint_encoding()
        .reject_trailing_bytes()
        .deserialize(bytes)
        .map_err(|e| WireError::Decode(e.to_string()))?;
    message.sanitize().map_err(|e| WireError::Inconsistent(e.to_string()))?;
    Ok(message)
}

/// Reject key or instruction counts the remaining input cannot hold.
fn check_counts(bytes: &[u8]) -> Result<(), WireError> {
    let rest = bytes.get(HEADER_LEN..).ok_or(WireError::Truncated("message header"))?;
    let (keys, used) = compact_len(rest, "account keys")?;
    let rest = rest
        .get(used..)
        .and_then(|r| r.get(keys * KEY_LEN + BLOCKHASH_LEN..))
        .ok_or(WireError::Truncated("account keys"))?;
    let (instructions, used) = compact_len(rest, "instructions")?;
    if instructions * MIN_INSTRUCTION_LEN > rest.len() - used {
        return Err(WireError::Truncated("instructions"));
    }
    Ok(())
}

fn compact_len(bytes: &[u8], what: &'static str) -> Result<(usize, usize), WireError> {
    decode_shortu16_len(bytes).map_err(|()| WireError::LengthPrefix(what))
}
