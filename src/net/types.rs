//! Request bodies and transport errors for the password endpoints.
//!
//! DESIGN
//! ======
//! Request types are built only after local validation passes, so holding a
//! `ResetPasswordRequest` implies the confirmation already matched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Body of `POST /password/forgot`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST /password/reset`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirmation: String,
    /// Opaque reset token taken from the reset link. Empty when the link
    /// carried none; the server rejects it.
    pub token: String,
}

impl std::fmt::Debug for ResetPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordRequest")
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .field("has_token", &!self.token.is_empty())
            .finish()
    }
}

/// Failure of a remote password operation.
///
/// The forms do not branch on the variant; every one of them surfaces as the
/// same generic error notification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("not available on server")]
    Unavailable,
}
