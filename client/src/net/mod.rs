//! Networking modules for the external REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies failures into banner text,
//! and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
