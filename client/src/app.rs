//! Root application component with routing and the session context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates the one [`SessionStore`] for the page and provides it as
//! `RwSignal<SessionStore>`. The server renders with an empty, unrestored
//! store; the browser reads `localStorage` right after hydration so both
//! renders produce the same first markup.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::routing::guard::RouteGuard;
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

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
/// Every path goes to [`RouteGuard`], which owns layout and screen choice.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::pending(BrowserStorage));
    provide_context(session);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        if !session.with_untracked(SessionStore::is_restored) {
            session.update(SessionStore::restore);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="ClearFrame Dashboard"/>

        <Router>
            <Routes fallback=|| view! { <RouteGuard/> }>
                <Route path=path!("/") view=RouteGuard/>
                <Route path=path!("/*any") view=RouteGuard/>
            </Routes>
        </Router>
    }
}
