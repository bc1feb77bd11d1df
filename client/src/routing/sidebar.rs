//! Sidebar navigation for the admin and member layouts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted by `RouteGuard` for authenticated layouts only. The logout button
//! clears the session before navigating to the audience's login form.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::table::normalize_path;
use crate::state::session::{Audience, Identity, SessionStore};

/// One link in a sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { id: "dashboard", icon: "📊", label: "Dashboard", path: "/" },
    NavItem { id: "members", icon: "👥", label: "Members", path: "/expenses" },
    NavItem { id: "requests", icon: "📩", label: "Requests", path: "/request" },
    NavItem { id: "accounts", icon: "🛡", label: "Trusted Accounts", path: "/account" },
];

const MEMBER_NAV: &[NavItem] = &[
    NavItem { id: "dashboard", icon: "🏠", label: "Dashboard", path: "/member" },
    NavItem { id: "posts", icon: "📋", label: "Unverified Posts", path: "/member/posts" },
    NavItem { id: "activity", icon: "📈", label: "My Activity", path: "/member/activity" },
    NavItem { id: "profile", icon: "👤", label: "Profile", path: "/member/profile" },
];

pub fn sidebar_items(audience: Audience) -> &'static [NavItem] {
    match audience {
        Audience::Admin => ADMIN_NAV,
        Audience::Member => MEMBER_NAV,
    }
}

/// Id of the item whose path equals `path`, if any.
pub fn active_item(path: &str, audience: Audience) -> Option<&'static str> {
    let path = normalize_path(path);
    sidebar_items(audience).iter().find(|item| item.path == path).map(|item| item.id)
}

fn tagline(audience: Audience) -> &'static str {
    match audience {
        Audience::Admin => "Admin Console",
        Audience::Member => "Verification Portal",
    }
}

#[component]
pub fn Sidebar(audience: Audience, open: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let active = move || active_item(&pathname.get(), audience);
    let signed_in_as = move || session.with(|s| s.session().identity().map(Identity::display_name));

    let on_logout = move |_| {
        session.update(SessionStore::logout);
        navigate(audience.login_path(), NavigateOptions::default());
    };

    let links = sidebar_items(audience)
        .iter()
        .map(|item| {
            let id = item.id;
            let class = move || {
                if active() == Some(id) { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
            };
            view! {
                <a href=item.path class=class>
                    <span class="sidebar__icon">{item.icon}</span>
                    <span class="sidebar__label">{item.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class=move || if open.get() { "sidebar" } else { "sidebar sidebar--collapsed" }>
            <div class="sidebar__header">
                <span class="sidebar__logo">"✓ ClearFrame"</span>
                <span class="sidebar__tagline">{tagline(audience)}</span>
            </div>
            <nav class="sidebar__nav">{links}</nav>
            <div class="sidebar__footer">
                <Show when=move || signed_in_as().is_some()>
                    <span class="sidebar__user">{move || signed_in_as().unwrap_or_default()}</span>
                </Show>
                <button class="sidebar__logout" on:click=on_logout>
                    "🚪 Logout"
                </button>
            </div>
        </aside>
    }
}
