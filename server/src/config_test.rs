use std::collections::HashMap;

use super::*;

const PROGRAM: &str = "2Ph9ShJ7wV3PwPdrFcFaJZm53t33CSBYkv3DEB56cdsq";

fn keypair_json() -> String {
    let bytes = keypair::from_seed(&[9; 32]).unwrap().to_bytes();
    serde_json::to_string(&bytes.to_vec()).unwrap()
}

fn lookup(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect();
    move |key| map.get(key).cloned()
}

fn minimal() -> Vec<(&'static str, String)> {
    vec![(PROGRAM_ID_VAR, PROGRAM.to_owned()), (BASE_KEYPAIR_VAR, keypair_json())]
}

fn temp_file(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!("gif-portal-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn debug_output_shows_only_the_public_key() {
    let cfg = ServerConfig::from_vars(lookup(&minimal())).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(rendered.contains(&cfg.portal.base_account.to_string()));
    assert!(!rendered.contains("secret"));
}

#[test]
fn minimal_config_uses_defaults() {
    let cfg = ServerConfig::from_vars(lookup(&minimal())).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.portal.cluster, "devnet");
    assert_eq!(cfg.portal.rpc_url, "https://api.devnet.solana.com");
    assert_eq!(cfg.portal.program_id.to_string(), PROGRAM);
    assert_eq!(cfg.portal.commitment, Commitment::Processed);
    assert_eq!(cfg.portal.base_account, keypair::from_seed(&[9; 32]).unwrap().pubkey());
}

#[test]
fn overrides_are_applied() {
    let mut vars = minimal();
    vars.push((PORT_VAR, "8080".to_owned()));
    vars.push((CLUSTER_VAR, "localnet".to_owned()));
    vars.push((COMMITMENT_VAR, "finalized".to_owned()));
    let cfg = ServerConfig::from_vars(lookup(&vars)).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.portal.rpc_url, "http://127.0.0.1:8899");
    assert_eq!(cfg.portal.commitment, Commitment::Finalized);
}

#[test]
fn missing_program_names_both_variables() {
    let vars = vec![(BASE_KEYPAIR_VAR, keypair_json())];
    let err = ServerConfig::from_vars(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::Missing(PROGRAM_ID_VAR, IDL_PATH_VAR)));
}

#[test]
fn missing_keypair_is_reported() {
    let vars = vec![(PROGRAM_ID_VAR, PROGRAM.to_owned())];
    let err = ServerConfig::from_vars(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::Missing(BASE_KEYPAIR_VAR, BASE_KEYPAIR_PATH_VAR)));
}

#[test]
fn invalid_port_is_reported() {
    let mut vars = minimal();
    vars.push((PORT_VAR, "http".to_owned()));
    let err = ServerConfig::from_vars(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: PORT_VAR, .. }));
}

#[test]
fn invalid_commitment_is_reported() {
    let mut vars = minimal();
    vars.push((COMMITMENT_VAR, "max".to_owned()));
    let err = ServerConfig::from_vars(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: COMMITMENT_VAR, .. }));
}

#[test]
fn program_id_can_come_from_idl_file() {
    let idl = format!(
        r#"{{"name":"gif_portal","instructions":[{{"name":"initialize"}},{{"name":"addGif"}}],"metadata":{{"address":"{PROGRAM}"}}}}"#
    );
    let path = temp_file("idl.json", &idl);
    let vars = vec![(IDL_PATH_VAR, path.clone()), (BASE_KEYPAIR_VAR, keypair_json())];
    let cfg = ServerConfig::from_vars(lookup(&vars)).unwrap();
    assert_eq!(cfg.portal.program_id.to_string(), PROGRAM);
    let _ = std::fs::remove_file(path);
}

#[test]
fn keypair_can_come_from_file() {
    let path = temp_file("base.json", &keypair_json());
    let vars = vec![(PROGRAM_ID_VAR, PROGRAM.to_owned()), (BASE_KEYPAIR_PATH_VAR, path.clone())];
    let cfg = ServerConfig::from_vars(lookup(&vars)).unwrap();
    assert_eq!(cfg.portal.base_account, keypair::from_seed(&[9; 32]).unwrap().pubkey());
    let _ = std::fs::remove_file(path);
}

#[test]
fn unreadable_keypair_file_is_reported() {
    let vars = vec![
        (PROGRAM_ID_VAR, PROGRAM.to_owned()),
        (BASE_KEYPAIR_PATH_VAR, "/nonexistent/gif-portal/base.json".to_owned()),
    ];
    let err = ServerConfig::from_vars(lookup(&vars)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn resolve_cluster_accepts_explicit_url() {
    let (label, url) = resolve_cluster("https://rpc.example.test/").unwrap();
    assert_eq!(label, "custom");
    assert_eq!(url, "https://rpc.example.test");
}

#[test]
fn resolve_cluster_rejects_unknown_name() {
    assert!(matches!(resolve_cluster("moon"), Err(ConfigError::Invalid { var: CLUSTER_VAR, .. })));
}

#[test]
fn resolve_cluster_maps_mainnet() {
    let (label, url) = resolve_cluster("mainnet-beta").unwrap();
    assert_eq!(label, "mainnet-beta");
    assert_eq!(url, "https://api.mainnet-beta.solana.com");
}
