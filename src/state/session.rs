#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Where a submission attempt currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    Pending,
    Authenticated,
    Failed,
}

/// Shared authentication session state.
///
/// Invariants, maintained by the transition methods below:
/// `user` is `Some` only while `Authenticated`; `error_message` is
/// `Some` only while `Failed`. Only the auth client writes this state.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<User>,
    pub error_message: Option<String>,
}

impl SessionState {
    /// Start a submission attempt.
    ///
    /// Returns `false` without changing anything when an attempt is
    /// already in flight; `Idle`, `Failed`, and `Authenticated` all
    /// accept a new attempt.
    pub fn begin_submit(&mut self) -> bool {
        if self.status == SessionStatus::Pending {
            return false;
        }
        self.status = SessionStatus::Pending;
        self.user = None;
        self.error_message = None;
        true
    }

    /// Sign-in succeeded: store the session payload.
    pub fn complete_sign_in(&mut self, user: User) {
        self.status = SessionStatus::Authenticated;
        self.user = Some(user);
        self.error_message = None;
    }

    /// Sign-up succeeded. Registration establishes no session; the user
    /// signs in afterwards, so the machine returns to `Idle`.
    pub fn complete_sign_up(&mut self) {
        self.status = SessionStatus::Idle;
        self.user = None;
        self.error_message = None;
    }

    /// The attempt failed; keep the message for inline display.
    pub fn fail(&mut self, message: String) {
        self.status = SessionStatus::Failed;
        self.user = None;
        self.error_message = Some(message);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == SessionStatus::Pending
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

/// One-shot redirect on login success.
///
/// Pages feed every session change through `observe`; the first
/// `Authenticated` observation yields the home route, and later
/// observations yield nothing, so re-runs of the surrounding effect
/// cannot navigate twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct NavigationWatcher {
    navigated: bool,
}

impl NavigationWatcher {
    pub fn observe(&mut self, state: &SessionState) -> Option<&'static str> {
        if self.navigated || !state.is_authenticated() {
            return None;
        }
        self.navigated = true;
        Some("/")
    }
}
