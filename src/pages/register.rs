//! Registration page: email/password account creation.

use leptos::prelude::*;

use crate::app::Identity;
use crate::util::browser::alert;

/// Registration page. Same contract as login: both fields required before
/// any network call, provider errors shown verbatim, and the auth-state
/// listener performs the post-registration redirect.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let identity = expect_context::<RwSignal<Identity>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_register = move |_| {
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
                if let Err(e) = client.register(&email, &password).await {
                    leptos::logging::warn!("registration error: {e}");
                    alert(&e);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (identity, email, password);
        }
    };

    view! {
        <div class="register-page">
            <h1>"Create your account"</h1>

            <label class="register-page__label">
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="register-page__label">
                "Password"
                <input
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary" on:click=on_register>
                "Sign Up"
            </button>

            <p class="register-page__alt">
                "Already registered? " <a href="/login">"Log in"</a>
            </p>
        </div>
    }
}
