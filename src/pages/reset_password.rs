//! Reset-password page: choose a new password from a reset link.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the link in the recovery e-mail, which carries the reset
//! token as `?token=...`. On success the user is sent to `/` to sign in
//! with the new password.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::ApiConfig;
use crate::net::api::HttpPasswordApi;
use crate::recovery::ResetPasswordFlow;
use crate::state::toast::ToastState;
use crate::util::navigation::RouterNavigator;
use crate::util::query::reset_token;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Loading..." } else { "Change password" }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let flow = Rc::new(ResetPasswordFlow::new(
        HttpPasswordApi::new(ApiConfig::from_build_env()),
        toasts,
        RouterNavigator(use_navigate()),
    ));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.is_submitting() {
            return;
        }
        busy.set(true);
        let flow = Rc::clone(&flow);
        let password_value = password.get_untracked();
        let confirmation_value = confirmation.get_untracked();
        let token = query.with_untracked(reset_token);
        leptos::task::spawn_local(async move {
            flow.submit(&password_value, &confirmation_value, &token).await;
            busy.set(false);
        });
    };

    view! {
        <div class="recovery-page">
            <div class="recovery-card">
                <h1>"Reset password"</h1>
                <form class="recovery-form" on:submit=on_submit>
                    <input
                        class="recovery-input"
                        type="password"
                        name="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="recovery-input"
                        type="password"
                        name="password_confirmation"
                        placeholder="Password confirmation"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <button class="recovery-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
