//! Utility helpers shared across the recovery pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `navigation` adapts the router's navigate closure to `Navigator`;
//! `query` reads the reset token from the router's parsed query.

pub mod navigation;
pub mod query;
