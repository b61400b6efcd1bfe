//! Event-handler entry points into the portal controller.
//!
//! In the hydrate build each call looks up the installed `GifPortal` and
//! runs the operation on the local task queue. During SSR there is no portal
//! and every call is a no-op.

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::{
    api::{self, ApiCosigner},
    browser::{BrowserAlert, PhantomWallet},
    chain::RpcChainClient,
    http::HttpTransport,
    types::PortalConfig,
};
#[cfg(feature = "hydrate")]
use crate::portal::{self, GifPortal};
#[cfg(feature = "hydrate")]
use crate::state::portal::PortalState;

/// The portal as wired in the browser.
#[cfg(feature = "hydrate")]
pub type BrowserPortal =
    GifPortal<PhantomWallet, RpcChainClient<HttpTransport, PhantomWallet, ApiCosigner>, BrowserAlert, RwSignal<PortalState>>;

/// Copyable slot for the page's portal, provided through context.
#[derive(Clone, Copy)]
pub struct PortalHandle {
    #[cfg(feature = "hydrate")]
    slot: StoredValue<Option<Rc<BrowserPortal>>, LocalStorage>,
}

impl PortalHandle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            slot: StoredValue::new_local(None),
        }
    }

    #[cfg(feature = "hydrate")]
    fn portal(self) -> Option<Rc<BrowserPortal>> {
        let portal = self.slot.get_value();
        if portal.is_none() {
            log::warn!("portal is not ready yet");
        }
        portal
    }
}

impl Default for PortalHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the server config, build the portal, and try a silent reconnect.
///
/// Without a config the page switches to its unavailable layout.
#[cfg(feature = "hydrate")]
pub fn boot(handle: PortalHandle, surface: RwSignal<PortalState>, config_out: RwSignal<Option<PortalConfig>>) {
    leptos::task::spawn_local(async move {
        let config = match api::fetch_config().await {
            Ok(config) => config,
            Err(e) => {
                portal::report_unavailable(&format!("loading portal config failed: {e}"), &BrowserAlert, &surface);
                return;
            }
        };
        log::info!("portal on {} via {}, program {}", config.cluster, config.rpc_url, config.program_id);

        let transport = HttpTransport::new(config.rpc_url.clone());
        let chain = RpcChainClient::new(transport, PhantomWallet, ApiCosigner, &config);
        let portal = Rc::new(GifPortal::new(PhantomWallet, chain, BrowserAlert, surface));
        handle.slot.set_value(Some(portal.clone()));
        config_out.set(Some(config));

        if let Err(e) = portal.attempt_silent_reconnect().await {
            log::debug!("silent reconnect: {e}");
        }
    });
}

/// Interactive wallet connect.
pub fn connect(handle: PortalHandle) {
    #[cfg(feature = "hydrate")]
    if let Some(portal) = handle.portal() {
        leptos::task::spawn_local(async move {
            if let Err(e) = portal.connect_explicit().await {
                log::debug!("connect: {e}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = handle;
}

/// Create the base account.
pub fn initialize(handle: PortalHandle) {
    #[cfg(feature = "hydrate")]
    if let Some(portal) = handle.portal() {
        leptos::task::spawn_local(async move {
            if let Err(e) = portal.initialize_account().await {
                log::debug!("initialize: {e}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = handle;
}

/// Re-read the list, e.g. after a failed fetch.
pub fn refresh(handle: PortalHandle) {
    #[cfg(feature = "hydrate")]
    if let Some(portal) = handle.portal() {
        leptos::task::spawn_local(async move {
            let _ = portal.fetch_list().await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = handle;
}

/// Submit the current draft.
pub fn submit(handle: PortalHandle) {
    #[cfg(feature = "hydrate")]
    if let Some(portal) = handle.portal() {
        leptos::task::spawn_local(async move {
            let link = portal.snapshot().draft;
            if let Err(e) = portal.submit_gif(&link).await {
                log::debug!("submit: {e}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = handle;
}

/// Mirror the link input into the portal's draft.
pub fn set_draft(handle: PortalHandle, text: String) {
    #[cfg(feature = "hydrate")]
    if let Some(portal) = handle.portal() {
        portal.set_draft(text);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (handle, text);
}
