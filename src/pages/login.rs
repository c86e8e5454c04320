//! Login page: Google popup sign-in plus email/password sign-in.

use leptos::prelude::*;

use crate::app::Identity;
use crate::util::browser::alert;

/// Login page.
///
/// Successful sign-ins never redirect from here; the auth-state listener
/// owns the redirect, which avoids racing it. Failures are logged and
/// surfaced as blocking alerts with the provider's message verbatim.
#[component]
pub fn LoginPage() -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_google = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(client) = identity.get_untracked().client else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = client.sign_in_with_google().await {
                    leptos::logging::warn!("Google sign-in error: {e}");
                    alert("Login failed. See console.");
                }
                // Redirect happens in the auth-state listener.
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
        }
    };

    let on_email = move |_| {
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            alert("Fill in all fields");
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(client) = identity.get_untracked().client else {
                return;
            };
            leptos::task::spawn_local(async move {
                if let Err(e) = client.sign_in_with_email(&email, &password).await {
                    leptos::logging::warn!("login error: {e}");
                    alert(&e);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Welcome back"</h1>

            <button class="btn btn--google" on:click=on_google>
                "Sign in with Google"
            </button>

            <div class="login-page__divider">"or"</div>

            <label class="login-page__label">
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=on_email>
                "Sign In"
            </button>

            <p class="login-page__alt">
                "No account? " <a href="/register">"Sign up"</a>
            </p>
        </div>
    }
}
