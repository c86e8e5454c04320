//! Card for a single pending input: one control per required field plus the
//! resolve action.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::inputs::{FieldControl, InputCard, InputsState};

/// One pending-input card.
///
/// The card's shape (field names, order, control kinds) is fixed at fetch
/// time; only field values and the submission phase change afterwards, so
/// the structure renders from a one-time snapshot and the live parts read
/// the shared state per closure.
#[component]
pub fn InputCardView(state: RwSignal<InputsState>, activity_id: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let snapshot = state
        .get_untracked()
        .cards
        .iter()
        .find(|c| c.activity_id == activity_id)
        .cloned();
    let Some(snapshot) = snapshot else {
        return ().into_any();
    };

    let on_resolve = {
        let id = activity_id.clone();
        move |_| {
            let Some(user) = auth.get_untracked().user else {
                return;
            };

            // Disabling the control is what serializes submissions; a second
            // click while in flight never reaches the network.
            let started = {
                let mut ok = false;
                state.update(|s| ok = s.begin_submit(&id));
                ok
            };
            if !started {
                return;
            }

            let request = state
                .get_untracked()
                .cards
                .iter()
                .find(|c| c.activity_id == id)
                .map(InputCard::resolve_request);
            let Some(request) = request else {
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let id = id.clone();
                leptos::task::spawn_local(async move {
                    match resolve(&user, &request).await {
                        Ok(()) => state.update(|s| s.apply_submit_ok(&id)),
                        Err(e) => {
                            leptos::logging::warn!("resolve failed for {id}: {e}");
                            crate::util::browser::alert(&format!("Failed to resolve: {e}"));
                            state.update(|s| s.apply_submit_err(&id));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (user, request);
            }
        }
    };

    let phase_of = {
        let id = activity_id.clone();
        move || {
            state
                .get()
                .cards
                .iter()
                .find(|c| c.activity_id == id)
                .map(|c| c.phase)
                .unwrap_or_default()
        }
    };
    let submitting = {
        let phase_of = phase_of.clone();
        move || phase_of() == crate::state::inputs::CardPhase::Submitting
    };
    let button_label = move || match phase_of() {
        crate::state::inputs::CardPhase::Idle => "Resolve & Process",
        crate::state::inputs::CardPhase::Submitting => "Processing...",
    };

    let created = snapshot
        .created_at
        .clone()
        .map(|ts| format!("Created: {ts}"));

    view! {
        <div class="input-card">
            <h3>{format!("Activity: {}", snapshot.activity_id)}</h3>
            <Show when={
                let created = created.clone();
                move || created.is_some()
            }>
                <p class="input-card__meta">{created.clone().unwrap_or_default()}</p>
            </Show>

            <div class="input-card__form">
                {snapshot
                    .fields
                    .iter()
                    .map(|field| {
                        let name = field.name.clone();
                        let placeholder = format!("Enter {name}...");
                        let value = {
                            let id = activity_id.clone();
                            let name = name.clone();
                            move || {
                                state
                                    .get()
                                    .cards
                                    .iter()
                                    .find(|c| c.activity_id == id)
                                    .and_then(|c| c.fields.iter().find(|f| f.name == name))
                                    .map(|f| f.value.clone())
                                    .unwrap_or_default()
                            }
                        };
                        let on_input = {
                            let id = activity_id.clone();
                            let name = name.clone();
                            move |ev: leptos::ev::Event| {
                                state.update(|s| {
                                    s.set_field_value(&id, &name, event_target_value(&ev));
                                });
                            }
                        };

                        let control = match field.control {
                            FieldControl::MultiLine => view! {
                                <textarea
                                    name=name.clone()
                                    placeholder=placeholder.clone()
                                    prop:value=value
                                    on:input=on_input
                                ></textarea>
                            }
                                .into_any(),
                            FieldControl::SingleLine => view! {
                                <input
                                    type="text"
                                    name=name.clone()
                                    placeholder=placeholder.clone()
                                    prop:value=value
                                    on:input=on_input
                                />
                            }
                                .into_any(),
                        };

                        view! {
                            <label>{field.label.clone()}</label>
                            {control}
                        }
                    })
                    .collect::<Vec<_>>()}

                <button
                    class="btn-resolve"
                    disabled=submitting
                    on:click=on_resolve
                >
                    {button_label}
                </button>
            </div>
        </div>
    }
    .into_any()
}

/// Mint a fresh token and submit the resolution payload.
#[cfg(feature = "hydrate")]
async fn resolve(
    user: &crate::state::auth::SessionUser,
    request: &crate::net::types::ResolveRequest,
) -> Result<(), String> {
    let token = crate::net::identity::id_token(user).await?;
    crate::net::api::resolve_pending_input(&token, request).await
}
