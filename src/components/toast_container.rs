//! Stack of transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by `App`. Each toast removes itself after
//! `TOAST_AUTO_DISMISS_MS` in the browser or when its close button is
//! clicked.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState, toast_kind_class};

/// Renders every toast in `ToastState`, newest last.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id.clone()
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id.clone();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::toast::TOAST_AUTO_DISMISS_MS;

        let expire_id = id.clone();
        gloo_timers::callback::Timeout::new(TOAST_AUTO_DISMISS_MS, move || {
            toasts.update(|s| {
                s.dismiss(&expire_id);
            });
        })
        .forget();
    }

    let on_close = move |_| {
        toasts.update(|s| {
            s.dismiss(&id);
        });
    };

    let class = format!("toast {}", toast_kind_class(toast.kind));
    let description = toast.description.clone();

    view! {
        <div class=class>
            <div class="toast__body">
                <strong class="toast__title">{toast.title.clone()}</strong>
                {description.map(|text| view! { <p class="toast__description">{text}</p> })}
            </div>
            <button class="toast__close" type="button" title="Dismiss" on:click=on_close>
                "×"
            </button>
        </div>
    }
}
