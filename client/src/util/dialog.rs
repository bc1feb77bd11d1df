//! Native browser confirmation dialog.
//!
//! Server renders have no user to ask, so the SSR path answers "no" and
//! destructive actions never run there.

/// Ask the user to confirm `message`. Returns `false` when no browser exists.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
