//! Fixed banner shown when the identity configuration could not be loaded.

use leptos::prelude::*;

use crate::state::auth::ConfigPhase;

/// Fatal-configuration banner. Invisible unless bootstrap failed; once it
/// shows, the page performs no further identity work and there is no retry.
#[component]
pub fn ConfigBanner() -> impl IntoView {
    let config = expect_context::<RwSignal<ConfigPhase>>();

    view! {
        <Show when=move || config.get() == ConfigPhase::Failed>
            <div class="config-banner">
                "System Error: Could not load application configuration."
            </div>
        </Show>
    }
}
