//! Reset-link query access.
//!
//! Reset links look like `/reset-password?token=<token>`. The router parses
//! and decodes the query; this only names the parameter and its fallback.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use leptos_router::params::ParamsMap;

pub const TOKEN_PARAM: &str = "token";

/// Reset token from the parsed URL query, empty when the link carried none.
pub fn reset_token(query: &ParamsMap) -> String {
    query.get(TOKEN_PARAM).unwrap_or_default()
}
