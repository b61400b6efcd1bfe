use super::*;

fn keys() -> (Pubkey, Pubkey, Pubkey) {
    (Pubkey::new_from_array([1; 32]), Pubkey::new_from_array([2; 32]), Pubkey::new_from_array([3; 32]))
}

// =============================================================
// Discriminators
// =============================================================

#[test]
fn initialize_discriminator_matches_anchor() {
    assert_eq!(instruction_discriminator("initialize"), [175, 175, 109, 31, 13, 152, 155, 237]);
}

#[test]
fn system_program_is_the_all_ones_address() {
    assert_eq!(SYSTEM_PROGRAM_ID.to_string(), "11111111111111111111111111111111");
}

#[test]
fn account_and_instruction_namespaces_differ() {
    assert_ne!(account_discriminator("initialize"), instruction_discriminator("initialize"));
}

// =============================================================
// Builders
// =============================================================

#[test]
fn initialize_orders_accounts_like_the_program() {
    let (program, base, user) = keys();
    let ix = initialize(&program, &base, &user);
    assert_eq!(ix.program_id, program);
    assert_eq!(
        ix.accounts,
        vec![
            AccountMeta::new(base, true),
            AccountMeta::new(user, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    );
    assert_eq!(ix.data, instruction_discriminator(INITIALIZE));
}

#[test]
fn add_gif_encodes_link_as_borsh_string() {
    let (program, base, user) = keys();
    let ix = add_gif(&program, &base, &user, "http://x/y.gif").unwrap();
    assert_eq!(&ix.data[..8], &instruction_discriminator(ADD_GIF));
    assert_eq!(&ix.data[8..12], &14u32.to_le_bytes());
    assert_eq!(&ix.data[12..], b"http://x/y.gif");
}

#[test]
fn add_gif_only_user_signs() {
    let (program, base, user) = keys();
    let ix = add_gif(&program, &base, &user, "a").unwrap();
    let signers: Vec<_> = ix.accounts.iter().filter(|m| m.is_signer).map(|m| m.pubkey).collect();
    assert_eq!(signers, vec![user]);
    assert!(ix.accounts.iter().all(|m| m.is_writable));
}
