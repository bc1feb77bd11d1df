//! Catch-all screen for paths outside the active route set.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionStore;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let pathname = use_location().pathname;
    let home = move || session.with(|s| s.session().audience().map_or("/", |a| a.home_path()));

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Nothing lives at " <code>{move || pathname.get()}</code> "."</p>
            <a class="submit-button" href=home>"Back to dashboard"</a>
        </div>
    }
}
