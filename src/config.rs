//! API endpoint configuration.
//!
//! WASM builds have no process environment at runtime, so the base URL is
//! captured at build time from `RECOVERY_API_BASE_URL`. An empty base URL
//! means same-origin relative requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Where the password endpoints live.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build a config from a raw base URL, dropping surrounding whitespace
    /// and any trailing `/`.
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim().trim_end_matches('/').to_owned() }
    }

    /// Read `RECOVERY_API_BASE_URL` as captured by the compiler.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("RECOVERY_API_BASE_URL").unwrap_or_default())
    }

    /// Join `path` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
