//! REST API helpers for the application backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! page behavior without crashing hydration. Bearer tokens are passed in by
//! the caller, fetched fresh from the identity client immediately before
//! each call — nothing here caches credentials.

#![allow(clippy::unused_async)]

use super::types::{PendingInput, ResolveRequest, WaitlistRequest};
use crate::state::waitlist::SubmitOutcome;

/// Reserved hosting URL serving the per-environment identity configuration.
pub const CONFIG_URL: &str = "/__/firebase/init.json";

/// Fetch the identity provider configuration for this deployment.
///
/// # Errors
///
/// Returns an error string when the config endpoint is unreachable or
/// responds non-OK. Fatal for the page; callers show a banner and stop.
pub async fn fetch_identity_config() -> Result<serde_json::Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_URL)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("config fetch failed: {}", resp.status()));
        }
        resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the signed-in user's pending inputs from `GET /api/inputs`.
///
/// # Errors
///
/// Returns an error string on network failure, non-OK status, or an
/// undecodable body.
pub async fn fetch_pending_inputs(token: &str) -> Result<Vec<PendingInput>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/inputs")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("inputs fetch failed: {}", resp.status()));
        }
        let body: super::types::InputsResponse =
            resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.inputs)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Submit a resolution payload to `POST /api/inputs`. No response body
/// fields are consumed on success.
///
/// # Errors
///
/// Returns an error string on network failure or a non-OK status.
pub async fn resolve_pending_input(token: &str, request: &ResolveRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/inputs")
            .header("Authorization", &format!("Bearer {token}"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("resolve failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err("not available on server".to_owned())
    }
}

/// Submit a waitlist signup to `POST /api/waitlist`.
///
/// Maps the three possible endings onto [`SubmitOutcome`]: a 2xx response,
/// a non-2xx response with an optional `{ error }` body, or no response at
/// all.
pub async fn join_waitlist(request: &WaitlistRequest) -> SubmitOutcome {
    #[cfg(feature = "hydrate")]
    {
        let built = match gloo_net::http::Request::post("/api/waitlist").json(request) {
            Ok(req) => req,
            Err(e) => {
                leptos::logging::warn!("waitlist request build failed: {e}");
                return SubmitOutcome::NetworkError;
            }
        };
        match built.send().await {
            Ok(resp) if resp.ok() => SubmitOutcome::Accepted,
            Ok(resp) => {
                let body = resp.json::<super::types::ErrorBody>().await.unwrap_or_default();
                SubmitOutcome::Rejected(body.error)
            }
            Err(e) => {
                leptos::logging::warn!("waitlist submit failed: {e}");
                SubmitOutcome::NetworkError
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        SubmitOutcome::NetworkError
    }
}
