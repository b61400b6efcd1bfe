//! Link input and send button.

use leptos::prelude::*;

use crate::state::portal::{Action, PortalState};
use crate::util::dispatch::{self, PortalHandle};

#[component]
pub fn GifForm() -> impl IntoView {
    let state = expect_context::<RwSignal<PortalState>>();
    let handle = expect_context::<PortalHandle>();
    let busy = move || state.with(|s| s.is_busy(Action::Submit));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch::submit(handle);
    };

    view! {
        <form class="gif-form" on:submit=on_submit>
            <input
                class="gif-form__input"
                type="text"
                placeholder="send gif link..."
                prop:value=move || state.with(|s| s.draft.clone())
                on:input=move |ev| dispatch::set_draft(handle, event_target_value(&ev))
            />
            <button type="submit" class="cta-button submit-gif-button" disabled=busy>
                {move || if busy() { "sending..." } else { "send" }}
            </button>
        </form>
    }
}
