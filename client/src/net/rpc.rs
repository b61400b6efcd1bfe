//! JSON-RPC request builders and response parsers.
//!
//! ERROR HANDLING
//! ==============
//! Every parser returns `ChainError` instead of panicking on unexpected
//! shapes; an RPC node that answers with garbage degrades to a failed call.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use program::{Hash, Pubkey, Signature};
use serde_json::{Value, json};

use super::chain::ChainError;
use super::types::Commitment;

/// Sends JSON-RPC calls to a cluster node.
#[async_trait(?Send)]
pub trait RpcTransport {
    /// Invoke `method` and return the `result` member of the response.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Transport`] when the node is unreachable and
    /// [`ChainError::Rpc`] when it answers with a JSON-RPC error.
    async fn call(&self, method: &str, params: Value) -> Result<Value, ChainError>;

    /// Pause between confirmation polls.
    async fn wait(&self, delay: Duration);
}

/// A program-owned account as returned by `getAccountInfo`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountInfo {
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

/// Status of a submitted transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureStatus {
    pub confirmation: Commitment,
    /// Program or runtime error, if execution failed.
    pub err: Option<Value>,
}

#[must_use]
pub fn request_body(id: u64, method: &str, params: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "method": method, "params": params })
}

/// Unwrap a JSON-RPC response envelope.
///
/// # Errors
///
/// Returns [`ChainError::Rpc`] for an `error` member and
/// [`ChainError::InvalidResponse`] when neither member is present.
pub fn parse_response(mut body: Value) -> Result<Value, ChainError> {
    if let Some(err) = body.get("error") {
        return Err(ChainError::Rpc {
            code: err.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: err.get("message").and_then(Value::as_str).unwrap_or("unknown error").to_owned(),
        });
    }
    match body.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(ChainError::InvalidResponse("response has neither result nor error".into())),
    }
}

#[must_use]
pub fn account_info_params(account: &Pubkey, commitment: Commitment) -> Value {
    json!([account.to_string(), { "encoding": "base64", "commitment": commitment.as_str() }])
}

/// Parse a `getAccountInfo` result; `None` when the account does not exist.
///
/// # Errors
///
/// Returns [`ChainError::InvalidResponse`] when the value is malformed.
pub fn parse_account_info(result: &Value) -> Result<Option<AccountInfo>, ChainError> {
    let value = result.get("value").unwrap_or(&Value::Null);
    if value.is_null() {
        return Ok(None);
    }
    let owner = value
        .get("owner")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("account has no owner"))?
        .parse::<Pubkey>()
        .map_err(|e| invalid(&e.to_string()))?;
    let encoded = value
        .get("data")
        .and_then(|d| d.get(0))
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("account data is not a base64 pair"))?;
    let data = BASE64.decode(encoded).map_err(|e| invalid(&format!("account data: {e}")))?;
    Ok(Some(AccountInfo { owner, data }))
}

#[must_use]
pub fn latest_blockhash_params(commitment: Commitment) -> Value {
    json!([{ "commitment": commitment.as_str() }])
}

/// Parse a `getLatestBlockhash` result.
///
/// # Errors
///
/// Returns [`ChainError::InvalidResponse`] when the hash is missing or malformed.
pub fn parse_latest_blockhash(result: &Value) -> Result<Hash, ChainError> {
    result
        .get("value")
        .and_then(|v| v.get("blockhash"))
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("missing blockhash"))?
        .parse::<Hash>()
        .map_err(|e| invalid(&e.to_string()))
}

#[must_use]
pub fn send_transaction_params(transaction: &[u8], preflight: Commitment) -> Value {
    json!([BASE64.encode(transaction), { "encoding": "base64", "preflightCommitment": preflight.as_str() }])
}

/// Parse a `sendTransaction` result.
///
/// # Errors
///
/// Returns [`ChainError::InvalidResponse`] when the signature is malformed.
pub fn parse_signature(result: &Value) -> Result<Signature, ChainError> {
    result
        .as_str()
        .ok_or_else(|| invalid("signature is not a string"))?
        .parse::<Signature>()
        .map_err(|e| invalid(&e.to_string()))
}

#[must_use]
pub fn signature_status_params(signature: &Signature) -> Value {
    json!([[signature.to_string()]])
}

/// Parse a `getSignatureStatuses` result for a single signature.
///
/// `None` means the node has not seen the transaction yet.
///
/// # Errors
///
/// Returns [`ChainError::InvalidResponse`] for an unknown confirmation level.
pub fn parse_signature_status(result: &Value) -> Result<Option<SignatureStatus>, ChainError> {
    let status = result.get("value").and_then(|v| v.get(0)).unwrap_or(&Value::Null);
    if status.is_null() {
        return Ok(None);
    }
    let confirmation = match status.get("confirmationStatus").and_then(Value::as_str) {
        Some(level) => level.parse().map_err(|e: String| invalid(&e))?,
        None => Commitment::Processed,
    };
    let err = status.get("err").filter(|e| !e.is_null()).cloned();
    Ok(Some(SignatureStatus { confirmation, err }))
}

fn invalid(reason: &str) -> ChainError {
    ChainError::InvalidResponse(reason.to_owned())
}
