//! Page-level view state and branch selection.
//!
//! The page renders exactly one branch. `view_branch` is the only place that
//! decides which, so components never inspect the raw states.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use std::collections::BTreeSet;
use std::fmt;

use super::gifs::GifListState;
use super::wallet::WalletConnectionState;

/// A user-triggered operation that may be in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Connect,
    Initialize,
    Submit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Connect => "connect",
            Self::Initialize => "initialize",
            Self::Submit => "submit",
        })
    }
}

/// Everything the page renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortalState {
    pub wallet: WalletConnectionState,
    pub gifs: GifListState,
    /// Text in the link input, not yet submitted.
    pub draft: String,
    /// Actions awaiting a remote response; their buttons render disabled.
    pub in_flight: BTreeSet<Action>,
    /// Set when the portal could not be built, e.g. `/api/config` failed.
    pub boot_error: Option<String>,
}

impl PortalState {
    /// State for a page whose portal could not be built.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self { boot_error: Some(reason.into()), ..Self::default() }
    }

    #[must_use]
    pub fn is_busy(&self, action: Action) -> bool {
        self.in_flight.contains(&action)
    }
}

/// The mutually exclusive page layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewBranch {
    /// Nothing can be done until the page is reloaded.
    Unavailable { reason: String },
    PromptConnect,
    /// `notice` is set when the branch was reached through a failed fetch
    /// rather than a confirmed missing account.
    PromptInitialize { notice: Option<String> },
    Gallery,
}

/// Pick the layout for `state`.
///
/// A boot failure hides every control. `Pending` shows the (empty) gallery so
/// the form appears immediately after connecting; a failed fetch offers
/// initialization alongside the error.
#[must_use]
pub fn view_branch(state: &PortalState) -> ViewBranch {
    if let Some(reason) = &state.boot_error {
        return ViewBranch::Unavailable { reason: reason.clone() };
    }
    if !state.wallet.is_connected() {
        return ViewBranch::PromptConnect;
    }
    match &state.gifs {
        GifListState::NotInitialized => ViewBranch::PromptInitialize { notice: None },
        GifListState::Failed(failure) => ViewBranch::PromptInitialize { notice: Some(failure.notice()) },
        GifListState::Pending | GifListState::Loaded(_) => ViewBranch::Gallery,
    }
}
