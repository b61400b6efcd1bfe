//! One-time base account initialization prompt.
//!
//! Shown both when the account is confirmed missing and when the last fetch
//! failed. In the second case `notice` explains the failure and a retry
//! button re-reads the list before anyone pays to initialize.

use leptos::prelude::*;

use crate::state::portal::{Action, PortalState};
use crate::util::dispatch::{self, PortalHandle};

#[component]
pub fn InitPanel(notice: Option<String>) -> impl IntoView {
    let state = expect_context::<RwSignal<PortalState>>();
    let handle = expect_context::<PortalHandle>();
    let busy = move || state.with(|s| s.is_busy(Action::Initialize));

    let notice_view = notice.map(|text| {
        view! {
            <div class="init-panel__notice">
                <p class="init-panel__notice-text">{text}</p>
                <button class="init-panel__retry" on:click=move |_| dispatch::refresh(handle)>
                    "retry"
                </button>
            </div>
        }
    });

    view! {
        <div class="connected-container init-panel">
            {notice_view}
            <button
                class="cta-button submit-gif-button"
                disabled=busy
                on:click=move |_| dispatch::initialize(handle)
            >
                {move || {
                    if busy() {
                        "initializing..."
                    } else {
                        "do one-time initialization for gif program account"
                    }
                }}
            </button>
        </div>
    }
}
