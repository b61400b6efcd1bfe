//! Program interface descriptor read from an Anchor IDL file.
//!
//! Only the parts the portal depends on are read: the program address and
//! the presence of the two instructions it calls. Both the pre-0.30 layout
//! (`metadata.address`, camelCase names) and the newer layout (top-level
//! `address`, snake_case names) are accepted.

#[cfg(test)]
#[path = "idl_test.rs"]
mod idl_test;

use serde::Deserialize;

use crate::instruction::{ADD_GIF, INITIALIZE};
use crate::{Pubkey, WireError};

#[derive(Debug, Deserialize)]
struct RawIdl {
    address: Option<String>,
    name: Option<String>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
    #[serde(default)]
    instructions: Vec<RawInstruction>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    address: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawInstruction {
    name: String,
}

/// The subset of a program IDL the portal relies on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramDescriptor {
    pub program_id: Pubkey,
    pub name: String,
    /// Instruction names normalised to snake_case.
    pub instructions: Vec<String>,
}

impl ProgramDescriptor {
    /// Parse an IDL and verify it declares `initialize` and `add_gif`.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::Idl`] for malformed JSON, a missing address, or a
    /// missing instruction.
    pub fn from_idl_json(text: &str) -> Result<Self, WireError> {
        let raw: RawIdl = serde_json::from_str(text).map_err(|e| WireError::Idl(e.to_string()))?;
        let address = raw
            .address
            .or_else(|| raw.metadata.as_ref().and_then(|m| m.address.clone()))
            .ok_or_else(|| WireError::Idl("no program address".into()))?;
        let program_id = address
            .parse::<Pubkey>()
            .map_err(|e| WireError::Idl(format!("bad program address '{address}': {e}")))?;
        let name = raw
            .name
            .or_else(|| raw.metadata.and_then(|m| m.name))
            .unwrap_or_default();
        let instructions: Vec<String> = raw.instructions.iter().map(|ix| to_snake_case(&ix.name)).collect();

        for required in [INITIALIZE, ADD_GIF] {
            if !instructions.iter().any(|n| n == required) {
                return Err(WireError::Idl(format!("missing instruction '{required}'")));
            }
        }

        Ok(Self { program_id, name, instructions })
    }
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
