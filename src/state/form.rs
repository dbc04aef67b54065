#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::validate::validate_email;

/// Which auth flow a form submission belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

/// Raw field values as typed into the form. `name` is ignored for
/// sign-in.
#[derive(Clone, Debug, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A validated submission, ready for the auth client.
///
/// `display_name` is `Some` exactly when the fields were validated in
/// sign-up mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

/// First validation failure for a submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingName,
    InvalidIdentifier,
    MissingSecret,
}

impl ValidationError {
    /// Inline text shown under the form.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingName => "Please enter your name.",
            Self::InvalidIdentifier => "Please enter a valid email address.",
            Self::MissingSecret => "Please enter your password.",
        }
    }
}

/// Validate form fields into a submission payload.
///
/// Checks run name → email → password and stop at the first failure,
/// so the user sees one error at a time. Never touches the network.
///
/// # Errors
///
/// Returns the first failing check as a [`ValidationError`].
pub fn validate(fields: &FormFields, mode: AuthMode) -> Result<Credentials, ValidationError> {
    let display_name = match mode {
        AuthMode::SignIn => None,
        AuthMode::SignUp => {
            let name = fields.name.trim();
            if name.is_empty() {
                return Err(ValidationError::MissingName);
            }
            Some(name.to_owned())
        }
    };

    if !validate_email(&fields.email) {
        return Err(ValidationError::InvalidIdentifier);
    }

    // Verbatim check: whitespace is a legal password character.
    if fields.password.is_empty() {
        return Err(ValidationError::MissingSecret);
    }

    Ok(Credentials {
        email: fields.email.clone(),
        password: fields.password.clone(),
        display_name,
    })
}
