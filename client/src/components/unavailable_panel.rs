//! Shown instead of every control when the portal could not start.

use leptos::prelude::*;

#[component]
pub fn UnavailablePanel(reason: String) -> impl IntoView {
    view! {
        <div class="connected-container unavailable-panel">
            <p class="unavailable-panel__title">"the portal is offline right now"</p>
            <p class="unavailable-panel__reason">{reason}</p>
            <p class="unavailable-panel__hint">"reload the page to try again"</p>
        </div>
    }
}
