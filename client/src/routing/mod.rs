//! Client-side navigation: the static route table, the layout selector that
//! gates it, and the sidebars mounted alongside.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RouteGuard` wraps every path. On each navigation it reads the session and
//! the location, mounts one sidebar, and renders the screen the table
//! resolves. This shapes navigation only; the API authorizes every action.

pub mod guard;
pub mod sidebar;
pub mod table;
