//! Portal controller: the page's operations over wallet and chain seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `GifPortal` owns the authoritative `PortalState`. Every mutation is
//! followed by `RenderSurface::present`, which in the browser copies the
//! state into a Leptos signal. Components read that signal and call back
//! into the portal through `util::dispatch`; they never write state
//! themselves.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on one thread. Each user action holds an in-flight guard
//! for the duration of its remote call, so a second click is answered with
//! `PortalError::Busy`. List fetches take a ticket and only the newest ticket
//! may write the list.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Set};
use program::{Pubkey, Signature};

use crate::net::chain::{ChainClient, ChainError};
use crate::net::wallet::{WalletError, WalletProvider};
use crate::state::gifs::{FetchFailure, GifListState};
use crate::state::portal::{Action, PortalState};
use crate::state::wallet::{ConnectMode, WalletConnectionState};

/// Shown when no wallet extension is injected into the page.
pub const WALLET_MISSING_NOTICE: &str = "No Solana wallet found. Install Phantom to use the portal.";
/// Shown when the portal cannot start.
pub const UNAVAILABLE_NOTICE: &str = "The GIF portal is unavailable right now. Reload the page to try again.";

/// Remote calls the portal makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoteOp {
    Initialize,
    AddGif,
    Fetch,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initialize => "initialize",
            Self::AddGif => "add_gif",
            Self::Fetch => "fetch",
        })
    }
}

/// Errors returned by portal operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortalError {
    #[error("no wallet provider found")]
    WalletUnavailable,
    #[error("wallet declined: {0}")]
    WalletRejected(String),
    #[error("{op} failed: {reason}")]
    RemoteCallFailed { op: RemoteOp, reason: String },
    #[error("no wallet connected")]
    NotConnected,
    #[error("{0} already in progress")]
    Busy(Action),
}

impl PortalError {
    fn remote(op: RemoteOp, err: &ChainError) -> Self {
        Self::RemoteCallFailed { op, reason: err.to_string() }
    }
}

/// Outcome of `GifPortal::submit_gif`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    /// The input was empty; nothing was sent.
    Skipped,
    /// The link was added in this transaction.
    Sent(Signature),
}

/// Blocking user notification.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Receives every state the portal commits.
pub trait RenderSurface {
    fn present(&self, state: &PortalState);
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

impl<T: RenderSurface + ?Sized> RenderSurface for Rc<T> {
    fn present(&self, state: &PortalState) {
        (**self).present(state);
    }
}

impl RenderSurface for RwSignal<PortalState> {
    fn present(&self, state: &PortalState) {
        self.set(state.clone());
    }
}

/// Apply `f` and hand a copy of the result to `surface`.
///
/// The borrow ends before `present` runs, so a surface may read the portal.
fn commit(state: &RefCell<PortalState>, surface: &dyn RenderSurface, f: impl FnOnce(&mut PortalState)) {
    let snapshot = {
        let mut state = state.borrow_mut();
        f(&mut state);
        state.clone()
    };
    surface.present(&snapshot);
}

/// Show the unavailable layout when no portal could be built.
pub fn report_unavailable(reason: &str, notifier: &impl Notifier, surface: &impl RenderSurface) {
    log::error!("portal unavailable: {reason}");
    surface.present(&PortalState::unavailable(reason));
    notifier.notify(UNAVAILABLE_NOTICE);
}

/// Marks an action in flight until dropped.
struct InFlight<'a> {
    state: &'a RefCell<PortalState>,
    surface: &'a dyn RenderSurface,
    action: Action,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let action = self.action;
        commit(self.state, self.surface, |s| {
            s.in_flight.remove(&action);
        });
    }
}

/// The GIF portal page logic.
pub struct GifPortal<W, C, N, R> {
    wallet: W,
    chain: C,
    notifier: N,
    surface: R,
    state: RefCell<PortalState>,
    fetch_ticket: Cell<u64>,
}

impl<W, C, N, R> GifPortal<W, C, N, R>
where
    W: WalletProvider,
    C: ChainClient,
    N: Notifier,
    R: RenderSurface,
{
    pub fn new(wallet: W, chain: C, notifier: N, surface: R) -> Self {
        let portal = Self {
            wallet,
            chain,
            notifier,
            surface,
            state: RefCell::new(PortalState::default()),
            fetch_ticket: Cell::new(0),
        };
        portal.surface.present(&portal.snapshot());
        portal
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PortalState {
        self.state.borrow().clone()
    }

    /// Replace the draft text.
    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|s| s.draft = text);
    }

    /// Reconnect without prompting if the wallet already trusts this site.
    ///
    /// Meant to run once on page load. A rejection leaves the page
    /// disconnected and is only logged.
    ///
    /// # Errors
    ///
    /// See [`Self::connect_explicit`].
    pub async fn attempt_silent_reconnect(&self) -> Result<Pubkey, PortalError> {
        self.connect_with(ConnectMode::OnlyIfTrusted).await
    }

    /// Ask the wallet to connect, prompting the user if needed.
    ///
    /// # Errors
    ///
    /// - [`PortalError::WalletUnavailable`] when no wallet is injected; the
    ///   user is also notified.
    /// - [`PortalError::WalletRejected`] when the wallet declines.
    /// - [`PortalError::Busy`] while another connect is pending.
    pub async fn connect_explicit(&self) -> Result<Pubkey, PortalError> {
        self.connect_with(ConnectMode::Interactive).await
    }

    async fn connect_with(&self, mode: ConnectMode) -> Result<Pubkey, PortalError> {
        let guard = self.begin(Action::Connect)?;
        if !self.wallet.is_available() {
            return Err(self.wallet_missing());
        }
        let address = match self.wallet.connect(mode).await {
            Ok(address) => address,
            Err(WalletError::Unavailable) => return Err(self.wallet_missing()),
            Err(err) => {
                log::warn!("wallet connect ({mode:?}) failed: {err}");
                return Err(PortalError::WalletRejected(err.to_string()));
            }
        };
        log::info!("connected with public key {address}");

        let changed = self.state.borrow().wallet.address() != Some(&address);
        self.update(|s| s.wallet = WalletConnectionState::Connected(address));
        drop(guard);

        if changed {
            let _ = self.fetch_list().await;
        }
        Ok(address)
    }

    fn wallet_missing(&self) -> PortalError {
        log::warn!("no wallet provider on this page");
        self.notifier.notify(WALLET_MISSING_NOTICE);
        PortalError::WalletUnavailable
    }

    /// Load the base account's GIF list.
    ///
    /// A fetch overtaken by a newer one is dropped without touching state and
    /// reports `Ok`.
    ///
    /// # Errors
    ///
    /// [`PortalError::RemoteCallFailed`] when the read fails; the list state
    /// becomes `Failed`.
    pub async fn fetch_list(&self) -> Result<(), PortalError> {
        let ticket = self.fetch_ticket.get() + 1;
        self.fetch_ticket.set(ticket);
        let result = self.chain.fetch_account().await;
        if ticket != self.fetch_ticket.get() {
            log::debug!("dropping stale fetch #{ticket}");
            return Ok(());
        }

        match result {
            Ok(Some(account)) => {
                log::debug!("fetched {} gifs", account.gif_list.len());
                self.update(|s| s.gifs = GifListState::Loaded(account.gif_list));
                Ok(())
            }
            Ok(None) => {
                log::info!("base account not initialized");
                self.update(|s| s.gifs = GifListState::NotInitialized);
                Ok(())
            }
            Err(err) => {
                log::error!("fetch failed: {err}");
                let failure = FetchFailure::from(&err);
                self.update(|s| s.gifs = GifListState::Failed(failure));
                Err(PortalError::remote(RemoteOp::Fetch, &err))
            }
        }
    }

    /// Create the base account, then reload the list once.
    ///
    /// # Errors
    ///
    /// - [`PortalError::NotConnected`] without a wallet.
    /// - [`PortalError::Busy`] while another initialize is pending.
    /// - [`PortalError::RemoteCallFailed`] when the transaction fails; state
    ///   is left unchanged so the user can retry.
    pub async fn initialize_account(&self) -> Result<Signature, PortalError> {
        let guard = self.begin(Action::Initialize)?;
        let user = self.connected_address()?;
        let signature = self.chain.initialize(&user).await.map_err(|err| {
            log::error!("initialize failed: {err}");
            PortalError::remote(RemoteOp::Initialize, &err)
        })?;
        log::info!("created base account in {signature}");
        drop(guard);

        let _ = self.fetch_list().await;
        Ok(signature)
    }

    /// Append `link` to the list.
    ///
    /// An empty `link` is skipped without a remote call and leaves the draft
    /// alone. Otherwise the draft is cleared before the call and is not
    /// restored if the call fails.
    ///
    /// # Errors
    ///
    /// - [`PortalError::NotConnected`] without a wallet.
    /// - [`PortalError::Busy`] while another submit is pending.
    /// - [`PortalError::RemoteCallFailed`] when the transaction fails.
    pub async fn submit_gif(&self, link: &str) -> Result<Submission, PortalError> {
        if link.is_empty() {
            log::debug!("no gif link given");
            return Ok(Submission::Skipped);
        }
        let guard = self.begin(Action::Submit)?;
        let user = self.connected_address()?;
        self.update(|s| s.draft.clear());

        let signature = self.chain.add_gif(&user, link).await.map_err(|err| {
            log::error!("add_gif failed for {link}: {err}");
            PortalError::remote(RemoteOp::AddGif, &err)
        })?;
        log::info!("sent gif {link} in {signature}");
        drop(guard);

        let _ = self.fetch_list().await;
        Ok(Submission::Sent(signature))
    }

    fn connected_address(&self) -> Result<Pubkey, PortalError> {
        self.state.borrow().wallet.address().copied().ok_or(PortalError::NotConnected)
    }

    fn begin(&self, action: Action) -> Result<InFlight<'_>, PortalError> {
        if self.state.borrow().is_busy(action) {
            return Err(PortalError::Busy(action));
        }
        self.update(|s| {
            s.in_flight.insert(action);
        });
        Ok(InFlight { state: &self.state, surface: &self.surface, action })
    }

    fn update(&self, f: impl FnOnce(&mut PortalState)) {
        commit(&self.state, &self.surface, f);
    }
}
