//! REST calls to the authentication API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is folded into [`AuthError`] so callers get a
//! typed `Result` instead of a panic or a stray exception path:
//! transport problems, structured server rejections, and "success"
//! responses with nothing in them are kept distinct.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiErrorBody, AuthError, SignInRequest, SignUpRequest, User};

/// Turn a non-OK response body into a displayable error.
///
/// The server's structured errors carry a `message` field; anything
/// else (missing field, blank message, unparseable body) falls back to
/// the generic text.
#[must_use]
pub fn parse_error_body(text: &str) -> AuthError {
    let message = serde_json::from_str::<ApiErrorBody>(text)
        .ok()
        .and_then(|body| body.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| super::types::FALLBACK_ERROR.to_owned());
    AuthError::Server { message }
}

/// Interpret a 2xx response body as a session payload.
///
/// Null, `""`, `{}`, and malformed JSON all count as empty: a sign-in
/// that "succeeded" without handing back a session is a failure.
///
/// # Errors
///
/// Returns [`AuthError::EmptyPayload`] when there is nothing usable.
pub fn success_payload(text: &str) -> Result<User, AuthError> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(text) else {
        return Err(AuthError::EmptyPayload);
    };
    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::String(s) => s.is_empty(),
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Err(AuthError::EmptyPayload);
    }
    Ok(User(value))
}

/// Call `POST /auth/signin` and return the session payload.
///
/// # Errors
///
/// Any transport, server, or empty-payload failure as [`AuthError`].
pub async fn sign_in(request: &SignInRequest) -> Result<User, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let text = post_json("/auth/signin", request).await?;
        success_payload(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(AuthError::Transport("not available on server".to_owned()))
    }
}

/// Call `POST /auth/signup`. Success returns no session; the user is
/// expected to sign in afterwards.
///
/// # Errors
///
/// Any transport, server, or empty-payload failure as [`AuthError`].
pub async fn sign_up(request: &SignUpRequest) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let text = post_json("/auth/signup", request).await?;
        success_payload(&text).map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(AuthError::Transport("not available on server".to_owned()))
    }
}

/// POST a JSON body and return the response text, mapping non-OK
/// statuses through [`parse_error_body`].
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<String, AuthError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;

    let text = resp.text().await.unwrap_or_default();
    if resp.ok() {
        Ok(text)
    } else {
        Err(parse_error_body(&text))
    }
}
