//! Toast notification state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<ToastState>`. Flows push through the
//! `Notifier` impl below; `ToastContainer` renders and expires entries.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::recovery::{Notification, NotificationKind, Notifier};

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_AUTO_DISMISS_MS: u32 = 3000;

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: Option<String>,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, notification: Notification) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind: notification.kind,
            title: notification.title,
            description: notification.description,
        });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }
}

/// CSS modifier class for a toast kind.
pub fn toast_kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast--success",
        NotificationKind::Error => "toast--error",
    }
}

impl Notifier for RwSignal<ToastState> {
    fn notify(&self, notification: Notification) {
        self.update(|state| {
            state.push(notification);
        });
    }
}
