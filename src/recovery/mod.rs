//! Password-recovery form flows.
//!
//! ARCHITECTURE
//! ============
//! Each flow runs `validate -> remote call -> outcome` for one submission.
//! Side effects go through capabilities handed in at construction:
//! `PasswordApi` for the backend, `Notifier` for user feedback and
//! `Navigator` for route changes. Pages supply browser implementations;
//! tests supply recording doubles.
//!
//! CONCURRENCY
//! ===========
//! Flows are single-threaded (`Cell` state, non-`Send` futures). A form
//! instance accepts one submission at a time; overlapping submissions
//! return `SubmitOutcome::Busy` without side effects.

pub mod forgot;
pub mod reset;
pub mod validation;

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

use std::cell::Cell;

use crate::net::types::{ApiError, ForgotPasswordRequest, ResetPasswordRequest};

pub use forgot::ForgotPasswordFlow;
pub use reset::ResetPasswordFlow;
pub use validation::ValidationError;

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient feedback requested by a flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_owned(),
            description: Some(description.to_owned()),
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.to_owned(),
            description: Some(description.to_owned()),
        }
    }
}

/// Shows feedback to the user. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Changes the current route.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

/// Remote password operations.
pub trait PasswordApi {
    /// `POST /password/forgot`.
    fn request_password_reset(&self, request: &ForgotPasswordRequest) -> impl Future<Output = Result<(), ApiError>>;

    /// `POST /password/reset`.
    fn reset_password(&self, request: &ResetPasswordRequest) -> impl Future<Output = Result<(), ApiError>>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn go_to(&self, path: &str) {
        (**self).go_to(path);
    }
}

impl<T: PasswordApi> PasswordApi for &T {
    fn request_password_reset(&self, request: &ForgotPasswordRequest) -> impl Future<Output = Result<(), ApiError>> {
        (**self).request_password_reset(request)
    }

    fn reset_password(&self, request: &ResetPasswordRequest) -> impl Future<Output = Result<(), ApiError>> {
        (**self).reset_password(request)
    }
}

/// Where a form instance is in its current (or last) submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
    ValidationRejected,
}

/// Terminal result of one call to `submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    Failed(ApiError),
    Rejected(ValidationError),
    /// Another submission from the same form is still in flight.
    Busy,
}

/// Per-form in-flight flag.
#[derive(Debug, Default)]
pub(crate) struct InFlight(Cell<bool>);

impl InFlight {
    /// Claim the form for one submission; `None` if already claimed.
    pub(crate) fn try_begin(&self) -> Option<InFlightGuard<'_>> {
        if self.0.replace(true) {
            return None;
        }
        Some(InFlightGuard(&self.0))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.0.get()
    }
}

/// Releases the form when the submission future completes or is dropped.
pub(crate) struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
