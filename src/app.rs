//! Root application component with routing, identity bootstrap, and the
//! auth-state route guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::config_banner::ConfigBanner;
use crate::pages::{
    inputs::InputsPage, landing::LandingPage, login::LoginPage, register::RegisterPage,
};
use crate::state::auth::{AuthState, ConfigPhase, classify_path, redirect_for};

/// Shared handle to the identity client, populated once bootstrap succeeds.
///
/// Empty on the server and before `init` resolves; pages treat an absent
/// client as "identity not ready yet".
#[derive(Clone, Default)]
pub struct Identity {
    #[cfg(feature = "hydrate")]
    pub client: Option<crate::net::identity::IdentityClient>,
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, bootstraps the identity provider exactly
/// once per page load, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // First auth notification hasn't arrived yet; the guard waits for it.
    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });
    let config = RwSignal::new(ConfigPhase::default());
    let identity = RwSignal::new(Identity::default());

    provide_context(auth);
    provide_context(config);
    provide_context(identity);

    // Identity bootstrap. Config failure is fatal for the page: banner up,
    // no listener, no further initialization.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::identity::init().await {
                Ok(client) => {
                    client.subscribe(move |session| {
                        auth.set(AuthState {
                            user: session,
                            loading: false,
                        });
                    });
                    identity.set(Identity {
                        client: Some(client),
                    });
                    config.set(ConfigPhase::Ready);
                }
                Err(e) => {
                    leptos::logging::warn!("identity init failed: {e}");
                    config.set(ConfigPhase::Failed);
                }
            }
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/activity-client.css"/>
        <Title text="Activities"/>

        <ConfigBanner/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("app") view=InputsPage/>
            </Routes>
        </Router>
    }
}

/// The page's single auth-state route guard.
///
/// Reacts to every auth notification: signed-in users are moved off the
/// auth-entry pages, signed-out users off the protected pages. Rendered
/// once under the router so the subscription exists exactly once.
#[component]
fn RouteGuard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let class = classify_path(&location.pathname.get());
        if let Some(target) = redirect_for(class, state.user.is_some()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
