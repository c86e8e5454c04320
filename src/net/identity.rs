//! Identity provider client built on the Firebase compat SDK loaded by the
//! host page.
//!
//! The SDK owns all session state (persistence, token refresh, popup
//! flows); this module only binds to it with `wasm-bindgen` and exposes a
//! small async surface. Everything here requires a browser environment, so
//! the whole module is compiled under the `hydrate` feature.
//!
//! SUBSCRIPTION
//! ============
//! `subscribe` installs the page's single auth-state listener. Initializing
//! twice would double-subscribe and fire every redirect twice, so a
//! module-level guard turns a second call into a logged no-op.

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::state::auth::SessionUser;

mod sdk {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type FirebaseAuth;
        pub type FirebaseUser;

        #[wasm_bindgen(js_namespace = ["firebase", "auth"])]
        pub type GoogleAuthProvider;

        #[wasm_bindgen(constructor)]
        pub fn new() -> GoogleAuthProvider;

        #[wasm_bindgen(js_namespace = firebase, js_name = initializeApp)]
        pub fn initialize_app(config: &JsValue) -> JsValue;

        #[wasm_bindgen(js_namespace = firebase)]
        pub fn auth() -> FirebaseAuth;

        #[wasm_bindgen(method, js_name = onAuthStateChanged)]
        pub fn on_auth_state_changed(
            this: &FirebaseAuth,
            callback: &Closure<dyn FnMut(JsValue)>,
        );

        #[wasm_bindgen(method, js_name = signInWithPopup)]
        pub fn sign_in_with_popup(
            this: &FirebaseAuth,
            provider: &GoogleAuthProvider,
        ) -> js_sys::Promise;

        #[wasm_bindgen(method, js_name = signInWithEmailAndPassword)]
        pub fn sign_in_with_email_and_password(
            this: &FirebaseAuth,
            email: &str,
            password: &str,
        ) -> js_sys::Promise;

        #[wasm_bindgen(method, js_name = createUserWithEmailAndPassword)]
        pub fn create_user_with_email_and_password(
            this: &FirebaseAuth,
            email: &str,
            password: &str,
        ) -> js_sys::Promise;

        #[wasm_bindgen(method, js_name = signOut)]
        pub fn sign_out(this: &FirebaseAuth) -> js_sys::Promise;

        #[wasm_bindgen(method, js_name = getIdToken)]
        pub fn get_id_token(this: &FirebaseUser) -> js_sys::Promise;

        #[wasm_bindgen(method, getter)]
        pub fn uid(this: &FirebaseUser) -> String;
    }
}

thread_local! {
    static SUBSCRIBED: Cell<bool> = const { Cell::new(false) };
}

/// Handle to the initialized identity provider client.
#[derive(Clone)]
pub struct IdentityClient {
    auth: sdk::FirebaseAuth,
}

/// Initialize the identity provider from the deployment config.
///
/// Called exactly once per page load by the app shell.
///
/// # Errors
///
/// Returns an error string when the config cannot be fetched; the page is
/// then left in its fatal banner state.
pub async fn init() -> Result<IdentityClient, String> {
    let config = crate::net::api::fetch_identity_config().await?;
    let config = json_to_js(&config)?;
    let _app = sdk::initialize_app(&config);
    Ok(IdentityClient { auth: sdk::auth() })
}

fn json_to_js(config: &serde_json::Value) -> Result<JsValue, String> {
    // The compat SDK takes a plain JS object; round-trip through JSON.parse.
    let raw = serde_json::to_string(config).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&raw).map_err(|e| error_message(&e))
}

impl IdentityClient {
    /// Install the page's auth-state listener. The callback fires with
    /// `Some` when a user is present and `None` when signed out, for the
    /// lifetime of the page.
    pub fn subscribe(&self, on_change: impl Fn(Option<SessionUser>) + 'static) {
        if SUBSCRIBED.with(Cell::get) {
            leptos::logging::warn!("auth listener already installed; ignoring");
            return;
        }
        SUBSCRIBED.with(|s| s.set(true));

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
            let session = if user.is_null() || user.is_undefined() {
                None
            } else {
                let uid = user.unchecked_ref::<sdk::FirebaseUser>().uid();
                Some(SessionUser { uid, handle: user })
            };
            on_change(session);
        });
        self.auth.on_auth_state_changed(&callback);
        // The listener lives as long as the page does.
        callback.forget();
    }

    /// Run the Google popup sign-in flow. The redirect after success is the
    /// auth listener's job, not this function's.
    ///
    /// # Errors
    ///
    /// Returns the provider's error message when the popup flow fails.
    pub async fn sign_in_with_google(&self) -> Result<(), String> {
        let provider = sdk::GoogleAuthProvider::new();
        JsFuture::from(self.auth.sign_in_with_popup(&provider))
            .await
            .map(|_| ())
            .map_err(|e| error_message(&e))
    }

    /// Email/password sign-in.
    ///
    /// # Errors
    ///
    /// Returns the provider's error message verbatim on rejection.
    pub async fn sign_in_with_email(&self, email: &str, password: &str) -> Result<(), String> {
        JsFuture::from(self.auth.sign_in_with_email_and_password(email, password))
            .await
            .map(|_| ())
            .map_err(|e| error_message(&e))
    }

    /// Email/password registration.
    ///
    /// # Errors
    ///
    /// Returns the provider's error message verbatim on rejection.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), String> {
        JsFuture::from(self.auth.create_user_with_email_and_password(email, password))
            .await
            .map(|_| ())
            .map_err(|e| error_message(&e))
    }

    /// Sign the current user out. Callers navigate to `/login`
    /// unconditionally afterwards; sign-out guarantees the no-user state.
    ///
    /// # Errors
    ///
    /// Returns the provider's error message on rejection.
    pub async fn sign_out(&self) -> Result<(), String> {
        JsFuture::from(self.auth.sign_out())
            .await
            .map(|_| ())
            .map_err(|e| error_message(&e))
    }
}

/// Mint a fresh bearer token for the session user. The SDK refreshes under
/// the hood; nothing is cached on this side.
///
/// # Errors
///
/// Returns the provider's error message when token minting fails.
pub async fn id_token(user: &SessionUser) -> Result<String, String> {
    let promise = user.handle.unchecked_ref::<sdk::FirebaseUser>().get_id_token();
    let token = JsFuture::from(promise).await.map_err(|e| error_message(&e))?;
    token.as_string().ok_or_else(|| "token was not a string".to_owned())
}

/// Extract a provider error's `message` field, falling back to its debug
/// form for non-object errors.
pub fn error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
