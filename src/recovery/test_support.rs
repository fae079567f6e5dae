//! Recording doubles for the flow capabilities.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use super::{Navigator, Notification, NotificationKind, Notifier, PasswordApi};
use crate::net::types::{ApiError, ForgotPasswordRequest, ResetPasswordRequest};

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) sent: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn count(&self, kind: NotificationKind) -> usize {
        self.sent.borrow().iter().filter(|n| n.kind == kind).count()
    }

    pub(crate) fn total(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) paths: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

/// Scripted backend. Replies `Ok(())` once the script runs out.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) replies: RefCell<VecDeque<Result<(), ApiError>>>,
    pub(crate) forgot_calls: RefCell<Vec<ForgotPasswordRequest>>,
    pub(crate) reset_calls: RefCell<Vec<ResetPasswordRequest>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeApi {
    pub(crate) fn replying(replies: impl IntoIterator<Item = Result<(), ApiError>>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()), ..Self::default() }
    }

    /// Hold the next call open until the returned sender fires.
    pub(crate) fn hold_next_call(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub(crate) fn calls(&self) -> usize {
        self.forgot_calls.borrow().len() + self.reset_calls.borrow().len()
    }

    async fn reply(&self) -> Result<(), ApiError> {
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            gate.await.unwrap_or_default();
        }
        self.replies.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

impl PasswordApi for FakeApi {
    async fn request_password_reset(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.forgot_calls.borrow_mut().push(request.clone());
        self.reply().await
    }

    async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.reset_calls.borrow_mut().push(request.clone());
        self.reply().await
    }
}
