//! Protected pending-inputs page: fetch, render, resolve.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::Identity;
use crate::components::input_card::InputCardView;
use crate::state::auth::AuthState;
use crate::state::inputs::{InputsState, ListPhase};

/// Pending-inputs page.
///
/// Unauthenticated visits are bounced to `/login` by the route guard. Once
/// a user is present the page fetches the list with a freshly minted token
/// and walks the list state machine: loading, loaded (cards or the
/// empty-state message), or a terminal inline error with no automatic
/// retry.
#[component]
pub fn InputsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let identity = expect_context::<RwSignal<Identity>>();
    let navigate = use_navigate();
    let state = RwSignal::new(InputsState::default());

    // One fetch per signed-in user per page view.
    let loaded_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if loaded_for.get().as_deref() == Some(user.uid.as_str()) {
            return;
        }
        loaded_for.set(Some(user.uid.clone()));

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match load(&user).await {
                    Ok(records) => state.update(|s| s.apply_loaded(records)),
                    Err(e) => {
                        leptos::logging::warn!("inputs fetch failed: {e}");
                        state.update(|s| s.apply_load_error());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(client) = identity.get_untracked().client else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = client.sign_out().await {
                    leptos::logging::warn!("logout error: {e}");
                }
                // Sign-out guarantees the no-user state, so this does not
                // wait on the auth listener.
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&identity, &navigate);
        }
    };

    // Keystrokes mutate card values inside `state`; memoizing phase and
    // emptiness keeps the page skeleton from re-rendering on every edit.
    let phase = Memo::new(move |_| state.get().phase);
    let empty = Memo::new(move |_| state.get().is_empty_state());

    view! {
        <div class="inputs-page">
            <header class="inputs-page__header">
                <h1>"Pending Inputs"</h1>
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </header>

            {move || match (phase.get(), empty.get()) {
                (ListPhase::Loading, _) => {
                    view! { <p class="inputs-page__loading">"Loading..."</p> }.into_any()
                }
                (ListPhase::Failed, _) => {
                    view! { <p class="inputs-page__error">"Error loading inputs."</p> }.into_any()
                }
                (ListPhase::Loaded, true) => {
                    view! { <p class="inputs-page__empty">"No pending inputs."</p> }.into_any()
                }
                (ListPhase::Loaded, false) => {
                    view! {
                        <div class="inputs-page__list">
                            <For
                                each=move || {
                                    state
                                        .get()
                                        .cards
                                        .iter()
                                        .map(|c| c.activity_id.clone())
                                        .collect::<Vec<_>>()
                                }
                                key=|id| id.clone()
                                children=move |id: String| {
                                    view! { <InputCardView state=state activity_id=id/> }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Mint a fresh token and fetch the pending-inputs list.
#[cfg(feature = "hydrate")]
async fn load(
    user: &crate::state::auth::SessionUser,
) -> Result<Vec<crate::net::types::PendingInput>, String> {
    let token = crate::net::identity::id_token(user).await?;
    crate::net::api::fetch_pending_inputs(&token).await
}
