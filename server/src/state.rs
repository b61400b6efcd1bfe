//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the public portal config served to browsers and the base account
//! keypair used to co-sign `initialize`. The keypair never leaves this
//! process.

use std::sync::Arc;

use client::net::types::PortalConfig;
use program::Keypair;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub portal: Arc<PortalConfig>,
    pub base_signer: Arc<Keypair>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { portal: Arc::new(config.portal), base_signer: Arc::new(config.base_keypair) }
    }
}
