//! Browser bindings for the hydrate build: the injected Phantom provider
//! and the blocking `alert` notifier.
//!
//! The provider is looked up on `window.solana` at every call, so a wallet
//! extension that injects late is still picked up.

use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use program::{Pubkey, Signature};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::wallet::{TransactionSigner, WalletError, WalletProvider};
use crate::portal::Notifier;
use crate::state::wallet::ConnectMode;

const INJECTION_KEY: &str = "solana";

/// Handle to the Phantom provider injected at `window.solana`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhantomWallet;

impl PhantomWallet {
    fn provider() -> Option<Object> {
        let window = web_sys::window()?;
        let provider = Reflect::get(&window, &JsValue::from_str(INJECTION_KEY)).ok()?;
        if provider.is_undefined() || provider.is_null() {
            return None;
        }
        let is_phantom = Reflect::get(&provider, &JsValue::from_str("isPhantom"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if !is_phantom {
            return None;
        }
        provider.dyn_into::<Object>().ok()
    }

    /// Call `provider[method](...args)` and await it if it returns a promise.
    async fn invoke(provider: &Object, method: &str, args: &Array) -> Result<JsValue, WalletError> {
        let func = Reflect::get(provider, &JsValue::from_str(method))
            .map_err(|e| WalletError::InvalidResponse(js_message(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| WalletError::InvalidResponse(format!("provider.{method} is not a function")))?;
        let result = func
            .apply(provider, args)
            .map_err(|e| WalletError::Rejected(js_message(&e)))?;
        match result.dyn_into::<Promise>() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .map_err(|e| WalletError::Rejected(js_message(&e))),
            Err(value) => Ok(value),
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for PhantomWallet {
    fn is_available(&self) -> bool {
        Self::provider().is_some()
    }

    async fn connect(&self, mode: ConnectMode) -> Result<Pubkey, WalletError> {
        let provider = Self::provider().ok_or(WalletError::Unavailable)?;
        let args = Array::new();
        if mode == ConnectMode::OnlyIfTrusted {
            let opts = Object::new();
            set(&opts, "onlyIfTrusted", &JsValue::TRUE)?;
            args.push(&opts);
        }
        let response = Self::invoke(&provider, "connect", &args).await?;
        let key = Reflect::get(&response, &JsValue::from_str("publicKey"))
            .map_err(|e| WalletError::InvalidResponse(js_message(&e)))?;
        let text = match key.as_string() {
            Some(text) => text,
            None => key
                .dyn_ref::<Object>()
                .map(|obj| String::from(obj.to_string()))
                .ok_or_else(|| WalletError::InvalidResponse("connect returned no publicKey".into()))?,
        };
        text.parse::<Pubkey>()
            .map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TransactionSigner for PhantomWallet {
    async fn sign_message(&self, message: &[u8]) -> Result<Signature, WalletError> {
        let provider = Self::provider().ok_or(WalletError::Unavailable)?;
        let params = Object::new();
        set(&params, "message", &JsValue::from_str(&bs58::encode(message).into_string()))?;
        let request = Object::new();
        set(&request, "method", &JsValue::from_str("signTransaction"))?;
        set(&request, "params", &params)?;

        let response = Self::invoke(&provider, "request", &Array::of1(&request)).await?;
        Reflect::get(&response, &JsValue::from_str("signature"))
            .ok()
            .and_then(|s| s.as_string())
            .ok_or_else(|| WalletError::InvalidResponse("signTransaction returned no signature".into()))?
            .parse::<Signature>()
            .map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }
}

/// Shows notifications with `window.alert`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), WalletError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| WalletError::InvalidResponse(js_message(&e)))
}

fn js_message(value: &JsValue) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
