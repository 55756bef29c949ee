//! Route guard for the seller dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{AuthState, GuardOutcome};

/// Gate a view behind authentication.
///
/// While the startup session check is still resolving, a placeholder is
/// rendered and no navigation happens, so a reload on a dashboard URL does
/// not flash-redirect to the login page. Once resolved, anonymous visitors
/// are sent to `/login` with the history entry replaced.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.get().guard() == GuardOutcome::RedirectToLogin {
            navigate("/login", NavigateOptions { replace: true, ..Default::default() });
        }
    });

    move || match auth.get().guard() {
        GuardOutcome::Wait => view! { <div class="page-loading">"Chargement..."</div> }.into_any(),
        GuardOutcome::RedirectToLogin => ().into_any(),
        GuardOutcome::Allow => children().into_any(),
    }
}
