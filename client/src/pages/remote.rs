//! Load state for data fetched by a screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen that reads from the API keeps one [`Remote`] signal per
//! request. [`fetch_into`] drives it from `Loading` to `Ready` or `Failed`,
//! and drops the outcome if the screen has unmounted in the meantime.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::state::session::SessionStore;
use crate::util::lifecycle::{MountFlag, spawn_request};

#[derive(Clone, Debug, PartialEq)]
pub enum Remote<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    /// `Ready` on success, else `Failed` with the API's reason or `fallback`.
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.user_message(fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Reset `target` to `Loading` and fill it from `request` once it settles.
pub fn fetch_into<T, F>(target: RwSignal<Remote<T>>, mounted: &MountFlag, fallback: &'static str, request: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    target.set(Remote::Loading);
    let mounted = mounted.clone();
    spawn_request(async move {
        let result = request.await;
        if let Err(e) = &result {
            log::warn!("{fallback}: {e}");
        }
        mounted.guard(|| target.set(Remote::from_result(result, fallback)));
    });
}

/// API client carrying the current session's token.
pub fn session_client(session: RwSignal<SessionStore>) -> ApiClient {
    session.with_untracked(|store| ApiClient::for_session(store.session()))
}

/// Identity id of the signed-in user, if the session has one.
pub fn session_identity_id(session: RwSignal<SessionStore>) -> Option<i64> {
    session.with_untracked(|store| store.session().identity_id())
}
