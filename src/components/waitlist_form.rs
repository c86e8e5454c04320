//! Waitlist signup form with honeypot spam deterrence.

use leptos::prelude::*;

use crate::net::types::WaitlistRequest;
use crate::state::waitlist::WaitlistState;

/// Email-capture form for the waitlist.
///
/// The hidden `website_url` control is the honeypot: humans never see it,
/// bots fill it, and the server drops submissions that carry a value. On
/// success the form is replaced by the success message; every failure path
/// re-enables the submit control through the same `finish` transition.
#[component]
pub fn WaitlistForm() -> impl IntoView {
    let state = RwSignal::new(WaitlistState::default());

    let on_join = move |_| {
        let started = {
            let mut ok = false;
            state.update(|s| ok = s.begin_submit());
            ok
        };
        if !started {
            // Validation message (or an in-flight submit) — no network call.
            return;
        }

        let request = {
            let s = state.get_untracked();
            WaitlistRequest {
                email: s.email.clone(),
                website_url: s.website_url.clone(),
            }
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::join_waitlist(&request).await;
                state.update(|s| s.finish(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <Show
            when=move || !matches!(state.get().phase, crate::state::waitlist::WaitlistPhase::Joined)
            fallback=|| {
                view! {
                    <div class="waitlist__success">
                        "You're on the list! We'll be in touch."
                    </div>
                }
            }
        >
            <div class="waitlist__form">
                <input
                    class="waitlist__email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || state.get().email
                    on:input=move |ev| {
                        state.update(|s| s.email = event_target_value(&ev));
                    }
                />
                // Honeypot: hidden from humans, submitted verbatim.
                <input
                    class="waitlist__website-url"
                    type="text"
                    name="website_url"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                    prop:value=move || state.get().website_url
                    on:input=move |ev| {
                        state.update(|s| s.website_url = event_target_value(&ev));
                    }
                />
                <Show when=move || state.get().error.is_some()>
                    <div class="waitlist__error">
                        {move || state.get().error.unwrap_or_default()}
                    </div>
                </Show>
                <button
                    class="btn btn--primary waitlist__join"
                    disabled=move || state.get().submitting()
                    on:click=on_join
                >
                    {move || state.get().button_label()}
                </button>
            </div>
        </Show>
    }
}
