//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::PortalConfig;
use crate::pages::portal::GifPortalPage;
use crate::state::portal::PortalState;
use crate::util::dispatch::PortalHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the portal state, its handle and the loaded config, then boots
/// the portal in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(PortalState::default());
    let config = RwSignal::new(None::<PortalConfig>);
    let handle = PortalHandle::new();

    provide_context(state);
    provide_context(config);
    provide_context(handle);

    #[cfg(feature = "hydrate")]
    crate::util::dispatch::boot(handle, state, config);

    view! {
        <Stylesheet id="leptos" href="/pkg/gif-portal.css"/>
        <Title text="cat gif portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GifPortalPage/>
            </Routes>
        </Router>
    }
}
