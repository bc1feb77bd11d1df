//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard applies one unauthenticated-redirect rule to every path.
//! It shapes navigation only; the API rejects unauthorized calls regardless.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::table::{PathClass, classify, normalize_path};
use crate::state::session::{Audience, SessionStore};

fn is_member_path(path: &str) -> bool {
    let path = normalize_path(path);
    path == "/member" || path.starts_with("/member/")
}

/// Login route to send an anonymous visitor to, if `path` needs a session.
///
/// Returns `None` until the store has read durable storage, so a reload does
/// not bounce a signed-in user before the session is restored.
pub fn unauth_redirect_target(path: &str, store: &SessionStore) -> Option<&'static str> {
    if !store.is_restored() || store.is_authenticated() {
        return None;
    }
    match classify(path) {
        PathClass::Public => None,
        PathClass::Authenticated if is_member_path(path) => Some(Audience::Member.login_path()),
        PathClass::Authenticated => Some(Audience::Admin.login_path()),
    }
}

/// Redirect to the matching login route whenever the session is anonymous
/// on a path that needs one.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionStore>, path: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let current = path.get();
        let target = session.with(|store| unauth_redirect_target(&current, store));
        if let Some(target) = target {
            log::debug!("redirecting anonymous visitor from {current} to {target}");
            navigate(target, NavigateOptions::default());
        }
    });
}
