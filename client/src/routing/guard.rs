//! Route guard and layout selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the whole application below the router. For every navigation it
//! reads the session store and the location, then mounts exactly one
//! sidebar (or none, for auth forms) and exactly one screen.
//!
//! TRADE-OFFS
//! ==========
//! This is a convenience gate. It hides chrome and avoids mounting screen
//! shells for the wrong audience, but every API call is still authorized by
//! the server.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages;
use crate::routing::sidebar::Sidebar;
use crate::routing::table::{Layout, Screen, resolve, select_layout};
use crate::state::session::{Audience, SessionStore};
use crate::util::auth::install_unauth_redirect;

/// What the content area shows for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mount {
    /// Durable storage has not been read yet.
    Waiting,
    /// Anonymous visitor on a path that needs a session.
    Redirecting,
    Screen(Screen),
}

/// Layout and content for `path` under the current store.
pub fn mount_for(path: &str, store: &SessionStore) -> (Layout, Mount) {
    let layout = select_layout(path, store.session());
    let mount = match layout {
        Layout::Public => Mount::Screen(resolve(path, layout)),
        Layout::Authenticated(_) if !store.is_restored() => Mount::Waiting,
        Layout::Authenticated(_) if !store.is_authenticated() => Mount::Redirecting,
        Layout::Authenticated(_) => Mount::Screen(resolve(path, layout)),
    };
    (layout, mount)
}

fn render_screen(screen: Screen) -> AnyView {
    match screen {
        Screen::AdminDashboard => view! { <pages::dashboard::AdminDashboardPage/> }.into_any(),
        Screen::ApprovalRequests => view! { <pages::requests::ApprovalRequestsPage/> }.into_any(),
        Screen::MemberList => view! { <pages::members::MemberListPage/> }.into_any(),
        Screen::AccountCreation => view! { <pages::accounts::AccountCreationPage/> }.into_any(),
        Screen::AdminLogin => view! { <pages::login::AdminLoginPage/> }.into_any(),
        Screen::MemberRegister => view! { <pages::register::RegisterPage/> }.into_any(),
        Screen::MemberLogin => view! { <pages::member_login::MemberLoginPage/> }.into_any(),
        Screen::MemberDashboard => view! { <pages::member_dashboard::MemberDashboardPage/> }.into_any(),
        Screen::MemberPosts => view! { <pages::member_posts::MemberPostsPage/> }.into_any(),
        Screen::MemberActivity => view! { <pages::member_activity::MemberActivityPage/> }.into_any(),
        Screen::MemberProfile => view! { <pages::member_profile::MemberProfilePage/> }.into_any(),
        Screen::NotFound => view! { <pages::not_found::NotFoundPage/> }.into_any(),
    }
}

fn render_mount(mount: Mount) -> AnyView {
    match mount {
        Mount::Waiting => view! { <p class="main-content__status">"Loading..."</p> }.into_any(),
        Mount::Redirecting => view! { <p class="main-content__status">"Redirecting to login..."</p> }.into_any(),
        Mount::Screen(screen) => render_screen(screen),
    }
}

/// Root layout: picks chrome and screen from session + location.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let pathname = use_location().pathname;
    install_unauth_redirect(session, pathname, use_navigate());

    let state = Memo::new(move |_| {
        let path = pathname.get();
        session.with(|store| mount_for(&path, store))
    });
    let layout = Memo::new(move |_| state.get().0);
    let mount = Memo::new(move |_| state.get().1);
    let menu_open = RwSignal::new(true);

    move || match layout.get() {
        Layout::Public => view! {
            <main class="main-content main-content--public">{move || render_mount(mount.get())}</main>
        }
        .into_any(),
        Layout::Authenticated(audience) => view! {
            <div class="content-container">
                <Sidebar audience=audience open=menu_open/>
                <main class="main-content">
                    <Show when=move || audience == Audience::Admin>
                        <button
                            class="menu-toggle"
                            title="Toggle menu"
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </Show>
                    {move || render_mount(mount.get())}
                </main>
            </div>
        }
        .into_any(),
    }
}
