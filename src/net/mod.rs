//! Networking modules for the password endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the request bodies and the
//! transport error.

pub mod api;
pub mod types;
