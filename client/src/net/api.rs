//! REST helpers for the portal's own server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
#[cfg(any(test, feature = "hydrate"))]
use base64::Engine as _;
use program::Signature;

use super::chain::{ChainError, Cosigner};
use super::types::PortalConfig;
#[cfg(any(test, feature = "hydrate"))]
use super::types::{ApiError, CosignRequest};

pub const CONFIG_ENDPOINT: &str = "/api/config";
pub const COSIGN_ENDPOINT: &str = "/api/base-account/cosign";

#[cfg(any(test, feature = "hydrate"))]
fn config_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cosign_failed_message(status: u16, body: Option<ApiError>) -> String {
    match body {
        Some(err) => format!("{status}: {}", err.error),
        None => format!("{status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn cosign_request(message: &[u8]) -> CosignRequest {
    CosignRequest { message: base64::engine::general_purpose::STANDARD.encode(message) }
}

/// Fetch the portal's public configuration from `/api/config`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn fetch_config() -> Result<PortalConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(config_failed_message(resp.status()));
        }
        resp.json::<PortalConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Co-signs `initialize` messages through the portal server.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiCosigner;

#[async_trait(?Send)]
impl Cosigner for ApiCosigner {
    async fn cosign(&self, message: &[u8]) -> Result<Signature, ChainError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(COSIGN_ENDPOINT)
                .json(&cosign_request(message))
                .map_err(|e| ChainError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChainError::Transport(e.to_string()))?;
            if !resp.ok() {
                let body = resp.json::<ApiError>().await.ok();
                return Err(ChainError::Cosign(cosign_failed_message(resp.status(), body)));
            }
            let body: super::types::CosignResponse =
                resp.json().await.map_err(|e| ChainError::InvalidResponse(e.to_string()))?;
            Ok(body.signature)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(ChainError::Transport("not available on server".to_owned()))
        }
    }
}
