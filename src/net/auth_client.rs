//! Auth client: drives sign-in/sign-up submissions through the session
//! state machine.
//!
//! The split mirrors the rest of the net layer: pure `apply_*`
//! functions hold every state transition (and are tested natively),
//! while the `spawn_*` wrappers do the async plumbing behind the
//! `hydrate` feature.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::{AuthError, SignInRequest, SignUpRequest, User};
use crate::state::form::Credentials;
use crate::state::session::SessionState;

/// Fold a sign-in result into the session.
pub fn apply_sign_in_result(state: &mut SessionState, result: Result<User, AuthError>) {
    match result {
        Ok(user) => state.complete_sign_in(user),
        Err(err) => state.fail(err.user_message().to_owned()),
    }
}

/// Fold a sign-up result into the session.
///
/// Returns `true` when registration completed; the caller is expected
/// to navigate to the sign-in page, since no session is established.
pub fn apply_sign_up_result(state: &mut SessionState, result: Result<(), AuthError>) -> bool {
    match result {
        Ok(()) => {
            state.complete_sign_up();
            true
        }
        Err(err) => {
            state.fail(err.user_message().to_owned());
            false
        }
    }
}

fn sign_in_request(credentials: &Credentials) -> SignInRequest {
    SignInRequest {
        email: credentials.email.clone(),
        password: credentials.password.clone(),
    }
}

fn sign_up_request(credentials: &Credentials) -> SignUpRequest {
    SignUpRequest {
        username: credentials.display_name.clone().unwrap_or_default(),
        email: credentials.email.clone(),
        password: credentials.password.clone(),
    }
}

/// Start a sign-in attempt.
///
/// Bails out when a submission is already pending; otherwise moves the
/// session to `Pending` and spawns the API call. The outcome lands back
/// in the session signal, where the page's navigation watcher picks up
/// a successful authentication.
pub fn spawn_sign_in(session: RwSignal<SessionState>, credentials: Credentials) {
    let started = session.try_update(SessionState::begin_submit).unwrap_or(false);
    if !started {
        return;
    }

    let request = sign_in_request(&credentials);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = super::api::sign_in(&request).await;
        session.update(|state| apply_sign_in_result(state, result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
    }
}

/// Start a sign-up attempt.
///
/// Same pending guard as [`spawn_sign_in`]. On success `on_registered`
/// runs (the pages use it to navigate to `/login`); on failure the
/// session carries the error message.
pub fn spawn_sign_up(
    session: RwSignal<SessionState>,
    credentials: Credentials,
    on_registered: impl FnOnce() + 'static,
) {
    let started = session.try_update(SessionState::begin_submit).unwrap_or(false);
    if !started {
        return;
    }

    let request = sign_up_request(&credentials);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = super::api::sign_up(&request).await;
        let registered = session
            .try_update(|state| apply_sign_up_result(state, result))
            .unwrap_or(false);
        if registered {
            on_registered();
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, on_registered);
    }
}
