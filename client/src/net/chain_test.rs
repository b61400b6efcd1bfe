use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use program::{GifEntry, Hash, Keypair, Signer, cosign, keypair};
use serde_json::{Value, json};

use super::*;

// =========================================================================
// Fakes
// =========================================================================

#[derive(Default)]
struct ScriptedTransport {
    responses: RefCell<HashMap<String, VecDeque<Result<Value, ChainError>>>>,
    calls: RefCell<Vec<(String, Value)>>,
    waits: Cell<u32>,
}

impl ScriptedTransport {
    fn respond(self, method: &str, result: Result<Value, ChainError>) -> Self {
        self.responses.borrow_mut().entry(method.to_owned()).or_default().push_back(result);
        self
    }

    fn methods(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(m, _)| m.clone()).collect()
    }

    fn sent_transaction(&self) -> Transaction {
        let calls = self.calls.borrow();
        let (_, params) = calls.iter().find(|(m, _)| m == "sendTransaction").expect("no sendTransaction call");
        let wire = BASE64.decode(params[0].as_str().unwrap()).unwrap();
        bincode::deserialize(&wire).unwrap()
    }
}

#[async_trait(?Send)]
impl RpcTransport for ScriptedTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value, ChainError> {
        self.calls.borrow_mut().push((method.to_owned(), params));
        self.responses
            .borrow_mut()
            .get_mut(method)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(ChainError::Transport(format!("no scripted response for {method}"))))
    }

    async fn wait(&self, _delay: Duration) {
        self.waits.set(self.waits.get() + 1);
    }
}

struct KeypairSigner {
    keypair: Keypair,
    decline: bool,
    prompts: Cell<u32>,
}

impl KeypairSigner {
    fn new(keypair: Keypair) -> Self {
        Self { keypair, decline: false, prompts: Cell::new(0) }
    }
}

#[async_trait(?Send)]
impl TransactionSigner for KeypairSigner {
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        self.prompts.set(self.prompts.get() + 1);
        if self.decline {
            return Err(WalletError::Rejected("User rejected the request.".into()));
        }
        Ok(self.keypair.sign_message(message))
    }
}

/// Applies the same policy as the server route.
struct PolicyCosigner {
    base: Keypair,
    program_id: Pubkey,
}

#[async_trait(?Send)]
impl Cosigner for PolicyCosigner {
    async fn cosign(&self, message: &[u8]) -> Result<Signature, ChainError> {
        cosign::cosign_initialize(&self.base, &self.program_id, message).map_err(|e| ChainError::Cosign(e.to_string()))
    }
}

fn program_id() -> Pubkey {
    Pubkey::new_from_array([10; 32])
}

fn base() -> Keypair {
    keypair::from_seed(&[4; 32]).unwrap()
}

fn user() -> Keypair {
    keypair::from_seed(&[5; 32]).unwrap()
}

fn config() -> PortalConfig {
    PortalConfig {
        cluster: "localnet".into(),
        rpc_url: "http://127.0.0.1:8899".into(),
        program_id: program_id(),
        base_account: base().pubkey(),
        commitment: Commitment::Processed,
    }
}

fn client(transport: ScriptedTransport) -> RpcChainClient<ScriptedTransport, KeypairSigner, PolicyCosigner> {
    RpcChainClient::new(
        transport,
        KeypairSigner::new(user()),
        PolicyCosigner { base: base(), program_id: program_id() },
        &config(),
    )
}

fn blockhash() -> Value {
    json!({ "value": { "blockhash": Hash::new_from_array([6; 32]).to_string(), "lastValidBlockHeight": 100 } })
}

fn status(level: &str) -> Value {
    json!({ "value": [{ "confirmationStatus": level, "err": null }] })
}

fn account_value(owner: Pubkey, data: &[u8]) -> Value {
    json!({ "value": { "owner": owner.to_string(), "data": [BASE64.encode(data), "base64"] } })
}

// =========================================================================
// fetch_account
// =========================================================================

#[tokio::test]
async fn fetch_missing_account_is_none() {
    let chain = client(ScriptedTransport::default().respond("getAccountInfo", Ok(json!({ "value": null }))));
    assert_eq!(chain.fetch_account().await.unwrap(), None);
}

#[tokio::test]
async fn fetch_decodes_program_account() {
    let account = BaseAccount {
        total_gifs: 1,
        gif_list: vec![GifEntry { gif_link: "http://x/y.gif".into(), user_address: user().pubkey() }],
    };
    let mut data = account.encode().unwrap();
    data.resize(9000, 0);
    let chain = client(ScriptedTransport::default().respond("getAccountInfo", Ok(account_value(program_id(), &data))));
    assert_eq!(chain.fetch_account().await.unwrap(), Some(account));
}

#[tokio::test]
async fn fetch_treats_system_owned_address_as_uninitialized() {
    let chain = client(
        ScriptedTransport::default().respond("getAccountInfo", Ok(account_value(program::SYSTEM_PROGRAM_ID, &[]))),
    );
    assert_eq!(chain.fetch_account().await.unwrap(), None);
}

#[tokio::test]
async fn fetch_rejects_foreign_owner() {
    let chain = client(
        ScriptedTransport::default().respond("getAccountInfo", Ok(account_value(Pubkey::new_from_array([99; 32]), &[0; 16]))),
    );
    assert!(matches!(chain.fetch_account().await, Err(ChainError::InvalidAccount(_))));
}

#[tokio::test]
async fn fetch_propagates_transport_failure() {
    let chain = client(ScriptedTransport::default());
    assert!(matches!(chain.fetch_account().await, Err(ChainError::Transport(_))));
}

// =========================================================================
// add_gif
// =========================================================================

#[tokio::test]
async fn add_gif_signs_sends_and_confirms() {
    let sig = Signature::from([7; 64]);
    let transport = ScriptedTransport::default()
        .respond("getLatestBlockhash", Ok(blockhash()))
        .respond("sendTransaction", Ok(json!(sig.to_string())))
        .respond("getSignatureStatuses", Ok(json!({ "value": [null] })))
        .respond("getSignatureStatuses", Ok(status("processed")));
    let chain = client(transport);

    assert_eq!(chain.add_gif(&user().pubkey(), "http://x/y.gif").await.unwrap(), sig);
    assert_eq!(
        chain.transport.methods(),
        vec!["getLatestBlockhash", "sendTransaction", "getSignatureStatuses", "getSignatureStatuses"]
    );
    assert_eq!(chain.transport.waits.get(), 1);

    let tx = chain.transport.sent_transaction();
    assert_eq!(tx.signatures.len(), 1, "add_gif carries only the user's signature");
    assert_eq!(tx.message.account_keys[0], user().pubkey());
    assert!(tx.verify().is_ok());
}

#[tokio::test]
async fn add_gif_does_not_send_when_wallet_declines() {
    let transport = ScriptedTransport::default().respond("getLatestBlockhash", Ok(blockhash()));
    let mut chain = client(transport);
    chain.signer.decline = true;

    let err = chain.add_gif(&user().pubkey(), "http://x/y.gif").await.unwrap_err();
    assert!(matches!(err, ChainError::Signing(WalletError::Rejected(_))));
    assert_eq!(chain.transport.methods(), vec!["getLatestBlockhash"]);
}

#[tokio::test]
async fn failed_execution_is_reported() {
    let sig = Signature::from([7; 64]);
    let transport = ScriptedTransport::default()
        .respond("getLatestBlockhash", Ok(blockhash()))
        .respond("sendTransaction", Ok(json!(sig.to_string())))
        .respond(
            "getSignatureStatuses",
            Ok(json!({ "value": [{ "confirmationStatus": "processed", "err": { "InstructionError": [0, { "Custom": 3012 }] } }] })),
        );
    let chain = client(transport);
    let err = chain.add_gif(&user().pubkey(), "x").await.unwrap_err();
    assert!(matches!(err, ChainError::TransactionFailed { signature, .. } if signature == sig));
}

#[tokio::test]
async fn confirmation_gives_up_after_budget() {
    let sig = Signature::from([7; 64]);
    let transport = ScriptedTransport::default()
        .respond("getLatestBlockhash", Ok(blockhash()))
        .respond("sendTransaction", Ok(json!(sig.to_string())))
        .respond("getSignatureStatuses", Ok(json!({ "value": [null] })))
        .respond("getSignatureStatuses", Ok(json!({ "value": [null] })));
    let chain = client(transport).with_confirmation(2, Duration::ZERO);
    assert_eq!(chain.add_gif(&user().pubkey(), "x").await.unwrap_err(), ChainError::ConfirmationTimeout(sig));
}

#[tokio::test]
async fn confirmation_waits_for_configured_commitment() {
    let sig = Signature::from([7; 64]);
    let transport = ScriptedTransport::default()
        .respond("getLatestBlockhash", Ok(blockhash()))
        .respond("sendTransaction", Ok(json!(sig.to_string())))
        .respond("getSignatureStatuses", Ok(status("processed")))
        .respond("getSignatureStatuses", Ok(status("confirmed")));
    let mut cfg = config();
    cfg.commitment = Commitment::Confirmed;
    let chain = RpcChainClient::new(
        transport,
        KeypairSigner::new(user()),
        PolicyCosigner { base: base(), program_id: program_id() },
        &cfg,
    );
    assert_eq!(chain.add_gif(&user().pubkey(), "x").await.unwrap(), sig);
    assert_eq!(chain.transport.waits.get(), 1);
}

// =========================================================================
// initialize
// =========================================================================

#[tokio::test]
async fn initialize_carries_user_and_base_signatures() {
    let sig = Signature::from([8; 64]);
    let transport = ScriptedTransport::default()
        .respond("getLatestBlockhash", Ok(blockhash()))
        .respond("sendTransaction", Ok(json!(sig.to_string())))
        .respond("getSignatureStatuses", Ok(status("finalized")));
    let chain = client(transport);

    assert_eq!(chain.initialize(&user().pubkey()).await.unwrap(), sig);

    let tx = chain.transport.sent_transaction();
    assert_eq!(tx.signatures.len(), 2);
    assert_eq!(tx.message.account_keys[..2], [user().pubkey(), base().pubkey()]);
    let message = tx.message.serialize();
    assert!(tx.signatures[0].verify(user().pubkey().as_ref(), &message));
    assert!(tx.signatures[1].verify(base().pubkey().as_ref(), &message));
}

#[tokio::test]
async fn refused_cosign_skips_wallet_prompt() {
    let transport = ScriptedTransport::default().respond("getLatestBlockhash", Ok(blockhash()));
    let chain = RpcChainClient::new(
        transport,
        KeypairSigner::new(user()),
        PolicyCosigner { base: keypair::from_seed(&[77; 32]).unwrap(), program_id: program_id() },
        &config(),
    );
    let err = chain.initialize(&user().pubkey()).await.unwrap_err();
    assert!(matches!(err, ChainError::Cosign(_)));
    assert_eq!(chain.signer.prompts.get(), 0);
}
