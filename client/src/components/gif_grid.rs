//! Grid of submitted GIFs, in on-chain order.

#[cfg(test)]
#[path = "gif_grid_test.rs"]
mod gif_grid_test;

use leptos::prelude::*;
use program::Pubkey;

use crate::state::portal::PortalState;

#[component]
pub fn GifGrid() -> impl IntoView {
    let state = expect_context::<RwSignal<PortalState>>();

    let items = move || {
        state.with(|s| {
            s.gifs
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| (index, item.gif_link.clone(), short_address(&item.user_address)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="gif-grid">
            <Show when=move || state.with(|s| s.gifs.items().is_empty())>
                <p class="gif-grid__empty">"no gifs yet, be the first :3"</p>
            </Show>
            <For
                each=items
                key=|(index, link, _)| (*index, link.clone())
                children=move |(_, link, by)| {
                    view! {
                        <div class="gif-item">
                            <img src=link.clone() alt=link/>
                            <span class="gif-item__by">{by}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// `AbCd…WxYz` form of an address for captions.
pub fn short_address(address: &Pubkey) -> String {
    let text = address.to_string();
    if text.len() <= 8 {
        return text;
    }
    format!("{}…{}", &text[..4], &text[text.len() - 4..])
}
