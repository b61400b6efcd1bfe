//! JSON-RPC over `fetch`, for the hydrate build.

use std::cell::Cell;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::chain::ChainError;
use super::rpc::{self, RpcTransport};

/// Posts JSON-RPC requests to one cluster endpoint.
pub struct HttpTransport {
    url: String,
    next_id: Cell<u64>,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), next_id: Cell::new(1) }
    }
}

#[async_trait(?Send)]
impl RpcTransport for HttpTransport {
    async fn call(&self, method: &str, params: Value) -> Result<Value, ChainError> {
        let id = self.next_id.replace(self.next_id.get() + 1);
        log::debug!("rpc {method} #{id}");
        let resp = gloo_net::http::Request::post(&self.url)
            .json(&rpc::request_body(id, method, params))
            .map_err(|e| ChainError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChainError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ChainError::Transport(format!("{method}: http {}", resp.status())));
        }
        let body: Value = resp.json().await.map_err(|e| ChainError::InvalidResponse(e.to_string()))?;
        rpc::parse_response(body)
    }

    async fn wait(&self, delay: Duration) {
        gloo_timers::future::sleep(delay).await;
    }
}
