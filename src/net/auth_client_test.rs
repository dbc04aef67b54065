use super::*;
use crate::net::types::FALLBACK_ERROR;
use crate::state::session::{NavigationWatcher, SessionStatus};

fn user() -> User {
    User(serde_json::json!({"user": {"username": "mira"}, "accessToken": "t"}))
}

fn pending_session() -> SessionState {
    let mut state = SessionState::default();
    assert!(state.begin_submit());
    state
}

// =============================================================
// Sign-in outcomes
// =============================================================

#[test]
fn sign_in_success_authenticates_and_navigates_once() {
    let mut state = pending_session();
    let mut watcher = NavigationWatcher::default();

    apply_sign_in_result(&mut state, Ok(user()));

    assert_eq!(state.status, SessionStatus::Authenticated);
    assert!(state.user.is_some());
    assert_eq!(watcher.observe(&state), Some("/"));
    assert_eq!(watcher.observe(&state), None);
}

#[test]
fn sign_in_server_error_fails_with_exact_message() {
    let mut state = pending_session();

    apply_sign_in_result(
        &mut state,
        Err(AuthError::Server {
            message: "X".to_owned(),
        }),
    );

    assert_eq!(state.status, SessionStatus::Failed);
    assert_eq!(state.error_message.as_deref(), Some("X"));
    assert!(state.user.is_none());
}

#[test]
fn sign_in_transport_error_fails_with_fallback_message() {
    let mut state = pending_session();

    apply_sign_in_result(&mut state, Err(AuthError::Transport("timeout".to_owned())));

    assert_eq!(state.status, SessionStatus::Failed);
    assert_eq!(state.error_message.as_deref(), Some(FALLBACK_ERROR));
}

#[test]
fn sign_in_empty_payload_fails_and_does_not_navigate() {
    let mut state = pending_session();
    let mut watcher = NavigationWatcher::default();

    apply_sign_in_result(&mut state, Err(AuthError::EmptyPayload));

    assert_eq!(state.status, SessionStatus::Failed);
    assert_eq!(watcher.observe(&state), None);
}

#[test]
fn failed_sign_in_can_be_retried() {
    let mut state = pending_session();
    apply_sign_in_result(
        &mut state,
        Err(AuthError::Server {
            message: "Wrong password".to_owned(),
        }),
    );

    assert!(state.begin_submit());
    apply_sign_in_result(&mut state, Ok(user()));
    assert_eq!(state.status, SessionStatus::Authenticated);
}

// =============================================================
// Sign-up outcomes
// =============================================================

#[test]
fn sign_up_success_registers_without_session() {
    let mut state = pending_session();
    let mut watcher = NavigationWatcher::default();

    let registered = apply_sign_up_result(&mut state, Ok(()));

    assert!(registered);
    assert_eq!(state.status, SessionStatus::Idle);
    assert!(state.user.is_none());
    // No session, so the home-route watcher stays quiet.
    assert_eq!(watcher.observe(&state), None);
}

#[test]
fn sign_up_failure_surfaces_message_and_does_not_register() {
    let mut state = pending_session();

    let registered = apply_sign_up_result(
        &mut state,
        Err(AuthError::Server {
            message: "Email already in use".to_owned(),
        }),
    );

    assert!(!registered);
    assert_eq!(state.status, SessionStatus::Failed);
    assert_eq!(state.error_message.as_deref(), Some("Email already in use"));
}
