use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ToastState::default();
    let first = state.push(Notification::success("Sent", "Check your inbox"));
    let second = state.push(Notification::error("Failed", "Try again"));

    assert_ne!(first, second);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].id, first);
    assert_eq!(state.toasts[0].kind, NotificationKind::Success);
    assert_eq!(state.toasts[0].description.as_deref(), Some("Check your inbox"));
    assert_eq!(state.toasts[1].kind, NotificationKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(Notification::success("a", "a"));
    let drop_id = state.push(Notification::error("b", "b"));

    assert!(state.dismiss(&drop_id));
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, keep);
}

#[test]
fn dismiss_of_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(Notification::success("a", "a"));
    assert!(!state.dismiss("missing"));
    assert_eq!(state.toasts.len(), 1);
}

// =============================================================
// Rendering helpers
// =============================================================

#[test]
fn kind_classes_match_stylesheet() {
    assert_eq!(toast_kind_class(NotificationKind::Success), "toast--success");
    assert_eq!(toast_kind_class(NotificationKind::Error), "toast--error");
}

// =============================================================
// Notifier impl
// =============================================================

#[test]
fn signal_notifier_pushes_toast() {
    let toasts = RwSignal::new(ToastState::default());
    Notifier::notify(&toasts, Notification::error("Failed", "Try again"));
    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "Failed");
}
