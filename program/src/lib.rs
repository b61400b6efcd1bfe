//! Wire model for the GIF portal on-chain program.
//!
//! This crate owns the GIF-specific part of the contract shared by the
//! `server` (which co-signs account initialization) and the browser
//! `client` (which builds, signs and submits transactions): Anchor
//! discriminators, the base account layout, the co-sign policy and the IDL
//! descriptor. Keys, messages and transactions are the `solana-sdk` types,
//! re-exported so both sides name them through one path.
//!
//! Nothing here talks to the network. Every function is pure so both sides
//! can test encoding without a cluster.

pub mod account;
pub mod b58;
pub mod cosign;
pub mod idl;
pub mod instruction;
pub mod keypair;
pub mod message;
pub mod transaction;

pub use account::{BaseAccount, GifEntry};
pub use solana_sdk::{
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    message::Message,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_program::ID as SYSTEM_PROGRAM_ID,
    transaction::Transaction,
};

/// Error returned by the encoders and decoders in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// An address string was not a valid public key.
    #[error("invalid address: {0}")]
    Address(String),
    /// Secret key material could not be parsed or did not match its public half.
    #[error("invalid keypair: {0}")]
    Keypair(String),
    /// Input ended before a complete value was read.
    #[error("unexpected end of input while reading {0}")]
    Truncated(&'static str),
    /// A compact-u16 length prefix was malformed or above `u16::MAX`.
    #[error("invalid length prefix for {0}")]
    LengthPrefix(&'static str),
    /// A serialized message was larger than one packet.
    #[error("message is {0} bytes, larger than a packet")]
    TooLarge(usize),
    /// A decoded message referenced accounts it does not carry.
    #[error("message is inconsistent: {0}")]
    Inconsistent(String),
    /// Account data did not start with the expected Anchor discriminator.
    #[error("account discriminator mismatch")]
    DiscriminatorMismatch,
    /// A payload could not be encoded.
    #[error("encode failed: {0}")]
    Encode(String),
    /// A payload could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),
    /// A signature was supplied for a key that is not a required signer.
    #[error("{0} is not a required signer")]
    NotASigner(Pubkey),
    /// The program interface descriptor was malformed or incomplete.
    #[error("invalid IDL: {0}")]
    Idl(String),
}
