//! `Navigator` backed by the Leptos router.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

use crate::recovery::Navigator;

/// Wraps the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigator<F>(pub F);

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn go_to(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
