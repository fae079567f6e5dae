//! Forgot-password page: request a recovery e-mail.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route reached from the sign-in screen. Submission is handled by
//! `ForgotPasswordFlow`; this page only owns the field values, the inline
//! field message and the busy state of the button.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api::HttpPasswordApi;
use crate::recovery::{ForgotPasswordFlow, SubmitOutcome};
use crate::state::toast::ToastState;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Loading..." } else { "Recover" }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error { "recovery-input recovery-input--error" } else { "recovery-input" }
}

/// Inline message shown under the e-mail field after a submission.
fn email_field_message(outcome: &SubmitOutcome) -> Option<String> {
    match outcome {
        SubmitOutcome::Rejected(err) => Some(err.to_string()),
        SubmitOutcome::Succeeded | SubmitOutcome::Failed(_) | SubmitOutcome::Busy => None,
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let field_message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let flow = Rc::new(ForgotPasswordFlow::new(HttpPasswordApi::new(ApiConfig::from_build_env()), toasts));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.is_submitting() {
            return;
        }
        busy.set(true);
        let flow = Rc::clone(&flow);
        let email_value = email.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = flow.submit(&email_value).await;
            field_message.set(email_field_message(&outcome));
            busy.set(false);
        });
    };

    view! {
        <div class="recovery-page">
            <div class="recovery-card">
                <h1>"Password recovery"</h1>
                <form class="recovery-form" on:submit=on_submit>
                    <input
                        class=move || input_class(field_message.get().is_some())
                        type="text"
                        name="email"
                        placeholder="E-mail"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || field_message.get().is_some()>
                        <p class="recovery-field-error">{move || field_message.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="recovery-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
                <a href="/" class="recovery-link">
                    "Back to login"
                </a>
            </div>
        </div>
    }
}
