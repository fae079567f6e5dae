//! Request-reset flow: e-mail in, recovery e-mail requested.

#[cfg(test)]
#[path = "forgot_test.rs"]
mod forgot_test;

use std::cell::Cell;

use super::validation::validate_email;
use super::{FormPhase, InFlight, Notification, Notifier, PasswordApi, SubmitOutcome};
use crate::net::types::ForgotPasswordRequest;

pub const SENT_TITLE: &str = "Recovery e-mail sent";
pub const SENT_DESCRIPTION: &str = "We sent you an e-mail with instructions to reset your password.";
pub const FAILED_TITLE: &str = "Password recovery failed";
pub const FAILED_DESCRIPTION: &str = "Something went wrong while requesting the recovery e-mail. Try again.";
pub const INVALID_EMAIL_TITLE: &str = "Invalid e-mail";

/// One forgot-password form instance.
pub struct ForgotPasswordFlow<A, N> {
    api: A,
    notifier: N,
    in_flight: InFlight,
    phase: Cell<FormPhase>,
}

impl<A: PasswordApi, N: Notifier> ForgotPasswordFlow<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier, in_flight: InFlight::default(), phase: Cell::new(FormPhase::Idle) }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Validate `email`, request the recovery e-mail and report the outcome.
    ///
    /// A blank e-mail is rejected without a request or notification. A
    /// malformed one is rejected with an error notification. Otherwise
    /// exactly one notification follows the remote call.
    pub async fn submit(&self, email: &str) -> SubmitOutcome {
        let Some(_guard) = self.in_flight.try_begin() else {
            return SubmitOutcome::Busy;
        };

        self.phase.set(FormPhase::Validating);
        let request = match validate_email(email) {
            Ok(email) => ForgotPasswordRequest { email },
            Err(err) => {
                self.phase.set(FormPhase::ValidationRejected);
                if err.notifies() {
                    self.notifier.notify(Notification::error(INVALID_EMAIL_TITLE, &err.to_string()));
                }
                leptos::logging::log!("forgot-password rejected locally: {err}");
                return SubmitOutcome::Rejected(err);
            }
        };

        self.phase.set(FormPhase::Submitting);
        match self.api.request_password_reset(&request).await {
            Ok(()) => {
                self.phase.set(FormPhase::Succeeded);
                self.notifier.notify(Notification::success(SENT_TITLE, SENT_DESCRIPTION));
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                leptos::logging::warn!("forgot-password request failed: {err}");
                self.phase.set(FormPhase::Failed);
                self.notifier.notify(Notification::error(FAILED_TITLE, FAILED_DESCRIPTION));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
