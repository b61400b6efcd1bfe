//! Wallet connect call-to-action.

use leptos::prelude::*;

use crate::state::portal::{Action, PortalState};
use crate::util::dispatch::{self, PortalHandle};

#[component]
pub fn ConnectButton() -> impl IntoView {
    let state = expect_context::<RwSignal<PortalState>>();
    let handle = expect_context::<PortalHandle>();
    let busy = move || state.with(|s| s.is_busy(Action::Connect));

    view! {
        <button
            class="cta-button connect-wallet-button"
            disabled=busy
            on:click=move |_| dispatch::connect(handle)
        >
            {move || if busy() { "connecting..." } else { "connect wallet" }}
        </button>
    }
}
