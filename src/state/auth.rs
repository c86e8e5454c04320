#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Transient reference to the identity provider's current user.
///
/// The provider SDK owns the session; this only carries the stable uid plus,
/// in the browser, the JS handle needed to mint fresh bearer tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub uid: String,
    #[cfg(feature = "hydrate")]
    pub(crate) handle: wasm_bindgen::JsValue,
}

/// Authentication state tracking the current user and whether the initial
/// auth-state notification has arrived yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

/// Config bootstrap outcome for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigPhase {
    #[default]
    Loading,
    Ready,
    /// Config fetch failed; fatal for this page view, no retry.
    Failed,
}

/// Route classes the auth-state listener cares about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Login and registration pages.
    AuthEntry,
    /// Pages that require a signed-in user.
    Protected,
    /// Everything else (landing page etc.).
    Public,
}

/// Classify a location path for the route guard.
pub fn classify_path(path: &str) -> RouteClass {
    if path.contains("login") || path.contains("register") {
        RouteClass::AuthEntry
    } else if path.contains("app") || path.contains("dashboard") {
        RouteClass::Protected
    } else {
        RouteClass::Public
    }
}

/// Decide where the auth-state listener should send the browser, if anywhere.
///
/// Signed-in users are bounced off the auth-entry pages into the app;
/// signed-out users are bounced off protected pages to login. Public pages
/// never redirect.
pub fn redirect_for(class: RouteClass, signed_in: bool) -> Option<&'static str> {
    match (class, signed_in) {
        (RouteClass::AuthEntry, true) => Some("/app"),
        (RouteClass::Protected, false) => Some("/login"),
        _ => None,
    }
}
