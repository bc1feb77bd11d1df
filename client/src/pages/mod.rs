//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its local signals and API requests. Shared form widgets,
//! load state and chart math live in `form`, `remote` and `chart`.

pub mod accounts;
pub mod chart;
pub mod dashboard;
pub mod form;
pub mod login;
pub mod member_activity;
pub mod member_dashboard;
pub mod member_login;
pub mod member_posts;
pub mod member_profile;
pub mod members;
pub mod not_found;
pub mod register;
pub mod remote;
pub mod requests;
