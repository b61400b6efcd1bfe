//! Page title block with the active cluster.

use leptos::prelude::*;

use crate::net::types::PortalConfig;

#[component]
pub fn PortalHeader() -> impl IntoView {
    let config = expect_context::<RwSignal<Option<PortalConfig>>>();
    let cluster = move || config.get().map(|c| c.cluster);

    view! {
        <div class="portal-header">
            <p class="portal-header__title">"o(`•ω•)づ cat gif portal ヾ(•ω•`)o"</p>
            <p class="portal-header__subtitle">"view your GIF collection in the metaverse :3 ✨"</p>
            <Show when=move || cluster().is_some()>
                <span class="portal-header__cluster">{move || cluster().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
