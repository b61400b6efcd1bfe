use super::*;

// =============================================================
// Envelope
// =============================================================

#[test]
fn request_body_is_jsonrpc_2() {
    let body = request_body(7, "getHealth", json!([]));
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 7);
    assert_eq!(body["method"], "getHealth");
}

#[test]
fn parse_response_extracts_result() {
    let result = parse_response(json!({ "jsonrpc": "2.0", "id": 1, "result": "ok" })).unwrap();
    assert_eq!(result, json!("ok"));
}

#[test]
fn parse_response_surfaces_rpc_error() {
    let err = parse_response(json!({ "error": { "code": -32002, "message": "simulation failed" } })).unwrap_err();
    assert_eq!(err, ChainError::Rpc { code: -32002, message: "simulation failed".into() });
}

#[test]
fn parse_response_rejects_empty_envelope() {
    assert!(matches!(parse_response(json!({ "id": 1 })), Err(ChainError::InvalidResponse(_))));
}

// =============================================================
// getAccountInfo
// =============================================================

#[test]
fn account_info_params_request_base64() {
    let params = account_info_params(&Pubkey::default(), Commitment::Processed);
    assert_eq!(params[0], "11111111111111111111111111111111");
    assert_eq!(params[1]["encoding"], "base64");
    assert_eq!(params[1]["commitment"], "processed");
}

#[test]
fn missing_account_is_none() {
    let result = json!({ "context": { "slot": 1 }, "value": null });
    assert_eq!(parse_account_info(&result).unwrap(), None);
}

#[test]
fn account_data_is_decoded() {
    let owner = Pubkey::new_from_array([3; 32]);
    let result = json!({
        "context": { "slot": 1 },
        "value": { "owner": owner.to_string(), "data": [BASE64.encode([1, 2, 3]), "base64"], "lamports": 1 }
    });
    let info = parse_account_info(&result).unwrap().unwrap();
    assert_eq!(info, AccountInfo { owner, data: vec![1, 2, 3] });
}

#[test]
fn account_with_bad_base64_is_invalid() {
    let result = json!({ "value": { "owner": Pubkey::default().to_string(), "data": ["@@@", "base64"] } });
    assert!(matches!(parse_account_info(&result), Err(ChainError::InvalidResponse(_))));
}

// =============================================================
// Transactions
// =============================================================

#[test]
fn blockhash_is_parsed() {
    let hash = Hash::new_from_array([6; 32]);
    let result = json!({ "value": { "blockhash": hash.to_string(), "lastValidBlockHeight": 10 } });
    assert_eq!(parse_latest_blockhash(&result).unwrap(), hash);
}

#[test]
fn send_params_carry_preflight_commitment() {
    let params = send_transaction_params(&[0, 1], Commitment::Confirmed);
    assert_eq!(params[0], BASE64.encode([0, 1]));
    assert_eq!(params[1]["preflightCommitment"], "confirmed");
}

#[test]
fn signature_result_is_parsed() {
    let sig = Signature::from([9; 64]);
    assert_eq!(parse_signature(&json!(sig.to_string())).unwrap(), sig);
    assert!(parse_signature(&json!(42)).is_err());
}

#[test]
fn unseen_signature_has_no_status() {
    assert_eq!(parse_signature_status(&json!({ "value": [null] })).unwrap(), None);
}

#[test]
fn status_reports_confirmation_and_error() {
    let result = json!({ "value": [{ "confirmationStatus": "confirmed", "err": { "InstructionError": [0, "Custom"] } }] });
    let status = parse_signature_status(&result).unwrap().unwrap();
    assert_eq!(status.confirmation, Commitment::Confirmed);
    assert!(status.err.is_some());
}

#[test]
fn status_without_level_counts_as_processed() {
    let status = parse_signature_status(&json!({ "value": [{ "err": null }] })).unwrap().unwrap();
    assert_eq!(status, SignatureStatus { confirmation: Commitment::Processed, err: None });
}
