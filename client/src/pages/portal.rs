//! The portal page: connect, initialize, or browse and submit.
//!
//! Which layout renders is decided by `view_branch` alone.

use leptos::prelude::*;

use crate::components::{
    connect_button::ConnectButton, gif_form::GifForm, gif_grid::GifGrid, init_panel::InitPanel,
    portal_footer::PortalFooter, portal_header::PortalHeader, unavailable_panel::UnavailablePanel,
};
use crate::state::portal::{PortalState, ViewBranch, view_branch};

#[component]
pub fn GifPortalPage() -> impl IntoView {
    let state = expect_context::<RwSignal<PortalState>>();
    let branch = Memo::new(move |_| state.with(view_branch));

    view! {
        <div class="portal-page">
            <div class="container">
                <div class="header-container">
                    <PortalHeader/>
                    {move || match branch.get() {
                        ViewBranch::Unavailable { reason } => view! { <UnavailablePanel reason=reason/> }.into_any(),
                        ViewBranch::PromptConnect => view! { <ConnectButton/> }.into_any(),
                        ViewBranch::PromptInitialize { notice } => view! { <InitPanel notice=notice/> }.into_any(),
                        ViewBranch::Gallery => {
                            view! {
                                <div class="connected-container">
                                    <GifForm/>
                                    <GifGrid/>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
                <PortalFooter/>
            </div>
        </div>
    }
}
