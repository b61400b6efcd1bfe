use super::*;

#[test]
fn default_is_disconnected() {
    let state = WalletConnectionState::default();
    assert!(!state.is_connected());
    assert_eq!(state.address(), None);
}

#[test]
fn connected_exposes_address() {
    let key = Pubkey::new_from_array([4; 32]);
    let state = WalletConnectionState::Connected(key);
    assert!(state.is_connected());
    assert_eq!(state.address(), Some(&key));
}
