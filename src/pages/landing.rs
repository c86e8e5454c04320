//! Public landing page with the waitlist signup form.

use leptos::prelude::*;

use crate::components::landing_nav::LandingNav;
use crate::components::waitlist_form::WaitlistForm;

/// Landing page — public, never redirects. The nav swaps with the session
/// state and the hero hosts the waitlist form.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <LandingNav/>

            <section class="landing-page__hero">
                <h1>"Plan activities together"</h1>
                <p>"Join the waitlist and we'll let you know when your spot opens up."</p>
                <WaitlistForm/>
            </section>
        </div>
    }
}
