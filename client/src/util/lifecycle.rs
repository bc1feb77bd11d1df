//! Screen lifetime tracking for in-flight requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens issue requests with `spawn_local` and cannot cancel them. A
//! [`MountFlag`] is captured by each request task and checked before the
//! response is written into screen signals, so a reply that lands after the
//! user navigated away is dropped instead of touching disposed state.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

/// Shared "still mounted" bit for one screen instance.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl MountFlag {
    /// A flag in the mounted state, not tied to any owner.
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A flag that is cleared when the current reactive owner is disposed.
    pub fn install() -> Self {
        let flag = Self::new();
        let on_unmount = flag.clone();
        on_cleanup(move || on_unmount.clear());
        flag
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Run `apply` only while the screen is mounted. Returns whether it ran.
    pub fn guard(&self, apply: impl FnOnce()) -> bool {
        if self.is_mounted() {
            apply();
            true
        } else {
            log::debug!("dropping response for unmounted screen");
            false
        }
    }
}

/// Start a request task in the browser. Server renders never issue requests.
pub fn spawn_request<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
