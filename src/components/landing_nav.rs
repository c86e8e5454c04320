//! Landing page navigation, swapping affordances with the session state.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Navigation fragment for the landing page: a Dashboard link while signed
/// in, Login / Sign Up links otherwise.
#[component]
pub fn LandingNav() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="landing-nav">
            {move || {
                if auth.get().user.is_some() {
                    view! {
                        <a href="/app" class="btn primary small">"Dashboard"</a>
                    }
                        .into_any()
                } else {
                    view! {
                        <a href="/login" class="nav-link">"Login"</a>
                        <a href="/register" class="btn primary small">"Sign Up"</a>
                    }
                        .into_any()
                }
            }}
        </nav>
    }
}
