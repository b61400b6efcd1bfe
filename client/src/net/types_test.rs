use super::*;

// =============================================================
// Commitment
// =============================================================

#[test]
fn commitment_orders_weakest_first() {
    assert!(Commitment::Processed < Commitment::Confirmed);
    assert!(Commitment::Confirmed < Commitment::Finalized);
}

#[test]
fn commitment_parses_rpc_names() {
    assert_eq!("confirmed".parse::<Commitment>(), Ok(Commitment::Confirmed));
    assert!("max".parse::<Commitment>().is_err());
}

#[test]
fn commitment_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Commitment::Finalized).unwrap(), "\"finalized\"");
}

// =============================================================
// PortalConfig
// =============================================================

#[test]
fn config_defaults_commitment_to_processed() {
    let json = serde_json::json!({
        "cluster": "devnet",
        "rpc_url": "https://api.devnet.solana.com",
        "program_id": "2Ph9ShJ7wV3PwPdrFcFaJZm53t33CSBYkv3DEB56cdsq",
        "base_account": "11111111111111111111111111111111",
    });
    let config: PortalConfig = serde_json::from_value(json).unwrap();
    assert_eq!(config.commitment, Commitment::Processed);
    assert_eq!(config.base_account, Pubkey::default());
}

#[test]
fn cosign_response_carries_base58_signature() {
    let resp = CosignResponse { signature: Signature::from([1; 64]) };
    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value["signature"], Signature::from([1; 64]).to_string());
}
