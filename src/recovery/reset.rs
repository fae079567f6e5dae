//! Set-new-password flow: password + confirmation + token from the reset link.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use std::cell::Cell;

use super::validation::validate_password_pair;
use super::{FormPhase, InFlight, Navigator, Notification, Notifier, PasswordApi, SubmitOutcome};
use crate::net::types::ResetPasswordRequest;

/// Route shown after a successful reset.
pub const AFTER_RESET_PATH: &str = "/";

pub const MISMATCH_TITLE: &str = "Passwords do not match";
pub const MISMATCH_DESCRIPTION: &str = "Type the same password in both fields.";
pub const FAILED_TITLE: &str = "Password reset failed";
pub const FAILED_DESCRIPTION: &str = "Could not reset your password. The link may be invalid or expired.";

/// One reset-password form instance.
pub struct ResetPasswordFlow<A, N, V> {
    api: A,
    notifier: N,
    navigator: V,
    in_flight: InFlight,
    phase: Cell<FormPhase>,
}

impl<A: PasswordApi, N: Notifier, V: Navigator> ResetPasswordFlow<A, N, V> {
    pub fn new(api: A, notifier: N, navigator: V) -> Self {
        Self {
            api,
            notifier,
            navigator,
            in_flight: InFlight::default(),
            phase: Cell::new(FormPhase::Idle),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase.get()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_active()
    }

    /// Check the confirmation, send the reset with `token` (taken from the
    /// reset link) and route or notify.
    ///
    /// Success navigates to `/` and notifies nothing. Mismatch and remote
    /// failure each notify one error and never navigate. A link without a
    /// token is still submitted; the server rejects it.
    pub async fn submit(&self, password: &str, confirmation: &str, token: &str) -> SubmitOutcome {
        let Some(_guard) = self.in_flight.try_begin() else {
            return SubmitOutcome::Busy;
        };

        self.phase.set(FormPhase::Validating);
        if let Err(err) = validate_password_pair(password, confirmation) {
            self.phase.set(FormPhase::ValidationRejected);
            self.notifier.notify(Notification::error(MISMATCH_TITLE, MISMATCH_DESCRIPTION));
            leptos::logging::log!("reset-password rejected locally: {err}");
            return SubmitOutcome::Rejected(err);
        }

        let request = ResetPasswordRequest {
            password: password.to_owned(),
            password_confirmation: confirmation.to_owned(),
            token: token.to_owned(),
        };
        if request.token.is_empty() {
            leptos::logging::warn!("reset-password submitted without a token");
        }

        self.phase.set(FormPhase::Submitting);
        match self.api.reset_password(&request).await {
            Ok(()) => {
                self.phase.set(FormPhase::Succeeded);
                self.navigator.go_to(AFTER_RESET_PATH);
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                leptos::logging::warn!("reset-password request failed: {err}");
                self.phase.set(FormPhase::Failed);
                self.notifier.notify(Notification::error(FAILED_TITLE, FAILED_DESCRIPTION));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
