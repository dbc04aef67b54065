//! Wire types for the authentication API.

use serde_json::Value;

/// Opaque session payload returned by a successful `POST /auth/signin`.
///
/// The server owns this shape; the client stores it whole and only
/// peeks at a display name for the header greeting.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct User(pub Value);

impl User {
    /// Best-effort display name: `username` at the top level or nested
    /// under `user`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.0
            .get("username")
            .or_else(|| self.0.get("user").and_then(|u| u.get("username")))
            .and_then(Value::as_str)
    }
}

/// Body for `POST /auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Structured error body the server may send on a failed request.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A failed remote call, discriminated by where it went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The request never produced a usable response (network, decode).
    Transport(String),
    /// The server rejected the request; `message` is ready to display.
    Server { message: String },
    /// A "success" response with nothing in it.
    EmptyPayload,
}

/// Fallback for failures the server gave no message for.
pub const FALLBACK_ERROR: &str = "Something went wrong. Please try again.";

/// Shown when a success response carries no usable payload.
pub const EMPTY_PAYLOAD_ERROR: &str = "An unexpected error occurred!";

impl AuthError {
    /// Inline text shown under the form.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Transport(_) => FALLBACK_ERROR,
            Self::Server { message } => message,
            Self::EmptyPayload => EMPTY_PAYLOAD_ERROR,
        }
    }
}
