//! Static path-to-screen table and the layout rules that filter it.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::state::session::{Audience, Session};

/// Every screen the dashboard can mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    AdminDashboard,
    ApprovalRequests,
    MemberList,
    AccountCreation,
    AdminLogin,
    MemberRegister,
    MemberLogin,
    MemberDashboard,
    MemberPosts,
    MemberActivity,
    MemberProfile,
    NotFound,
}

/// Who a route is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAudience {
    Public,
    AdminOnly,
    MemberOnly,
}

impl RouteAudience {
    fn admits(self, layout: Layout) -> bool {
        match (self, layout) {
            (Self::Public, Layout::Public)
            | (Self::AdminOnly, Layout::Authenticated(Audience::Admin))
            | (Self::MemberOnly, Layout::Authenticated(Audience::Member)) => true,
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub screen: Screen,
    pub audience: RouteAudience,
}

const fn entry(path: &'static str, screen: Screen, audience: RouteAudience) -> RouteEntry {
    RouteEntry { path, screen, audience }
}

/// The full route table. Order matters: the first exact match wins.
pub const ROUTES: &[RouteEntry] = &[
    entry("/", Screen::AdminDashboard, RouteAudience::AdminOnly),
    entry("/request", Screen::ApprovalRequests, RouteAudience::AdminOnly),
    entry("/expenses", Screen::MemberList, RouteAudience::AdminOnly),
    entry("/account", Screen::AccountCreation, RouteAudience::AdminOnly),
    entry("/login", Screen::AdminLogin, RouteAudience::Public),
    entry("/register", Screen::MemberRegister, RouteAudience::Public),
    entry("/m_login", Screen::MemberLogin, RouteAudience::Public),
    entry("/member", Screen::MemberDashboard, RouteAudience::MemberOnly),
    entry("/member/posts", Screen::MemberPosts, RouteAudience::MemberOnly),
    entry("/member/activity", Screen::MemberActivity, RouteAudience::MemberOnly),
    entry("/member/profile", Screen::MemberProfile, RouteAudience::MemberOnly),
];

/// Paths that render without sidebar chrome.
const PUBLIC_PATHS: [&str; 3] = ["/login", "/register", "/m_login"];

/// Coarse class of a path, independent of any session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathClass {
    Public,
    Authenticated,
}

/// Chrome and route set to mount for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Auth forms, no sidebar.
    Public,
    /// Sidebar plus the route set of the given audience.
    Authenticated(Audience),
}

/// Drop query, fragment and trailing slashes. The root stays `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

pub fn classify(path: &str) -> PathClass {
    if PUBLIC_PATHS.contains(&normalize_path(path)) {
        PathClass::Public
    } else {
        PathClass::Authenticated
    }
}

/// Pick the layout for `path` given the current session.
///
/// Authenticated paths use the session's recorded audience. With no session
/// the admin set is mounted, and the guard's redirect sends the visitor to a
/// login form.
pub fn select_layout(path: &str, session: &Session) -> Layout {
    match classify(path) {
        PathClass::Public => Layout::Public,
        PathClass::Authenticated => Layout::Authenticated(session.audience().unwrap_or(Audience::Admin)),
    }
}

/// Screen for `path` within `layout`; [`Screen::NotFound`] when nothing matches.
pub fn resolve(path: &str, layout: Layout) -> Screen {
    let path = normalize_path(path);
    ROUTES
        .iter()
        .find(|route| route.path == path && route.audience.admits(layout))
        .map_or(Screen::NotFound, |route| route.screen)
}
