//! REST client for the password-recovery endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with
//! `ApiError::Unavailable`, since the forms only submit from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status and any transport failure come back as `ApiError`;
//! callers never see a panic.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::types::{ApiError, ForgotPasswordRequest, ResetPasswordRequest};
use crate::config::ApiConfig;
use crate::recovery::PasswordApi;

pub const FORGOT_PASSWORD_PATH: &str = "/password/forgot";
pub const RESET_PASSWORD_PATH: &str = "/password/reset";

/// `PasswordApi` over HTTP.
#[derive(Clone, Debug, Default)]
pub struct HttpPasswordApi {
    config: ApiConfig,
}

impl HttpPasswordApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn forgot_url(&self) -> String {
        self.config.endpoint(FORGOT_PASSWORD_PATH)
    }

    fn reset_url(&self) -> String {
        self.config.endpoint(RESET_PASSWORD_PATH)
    }
}

impl PasswordApi for HttpPasswordApi {
    async fn request_password_reset(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        post_json(&self.forgot_url(), request).await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        post_json(&self.reset_url(), request).await
    }
}

/// POST `body` as JSON and map the response status.
#[cfg(feature = "hydrate")]
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    status_result(resp.status())
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::unused_async)]
async fn post_json<T: Serialize>(_url: &str, _body: &T) -> Result<(), ApiError> {
    Err(ApiError::Unavailable)
}

#[cfg(any(test, feature = "hydrate"))]
fn status_result(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}
