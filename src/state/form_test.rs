use super::*;

fn fields(name: &str, email: &str, password: &str) -> FormFields {
    FormFields {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// Sign-in validation
// =============================================================

#[test]
fn sign_in_accepts_valid_email_and_password() {
    let creds = validate(&fields("", "a@b.com", "pw"), AuthMode::SignIn).expect("valid");
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "pw");
    assert_eq!(creds.display_name, None);
}

#[test]
fn sign_in_rejects_malformed_email_even_with_valid_password() {
    let err = validate(&fields("", "bad", "pw"), AuthMode::SignIn).unwrap_err();
    assert_eq!(err, ValidationError::InvalidIdentifier);
}

#[test]
fn sign_in_rejects_missing_email() {
    let err = validate(&fields("", "", "pw"), AuthMode::SignIn).unwrap_err();
    assert_eq!(err, ValidationError::InvalidIdentifier);
}

#[test]
fn sign_in_rejects_empty_password_with_valid_email() {
    let err = validate(&fields("", "a@b.com", ""), AuthMode::SignIn).unwrap_err();
    assert_eq!(err, ValidationError::MissingSecret);
}

#[test]
fn sign_in_email_error_wins_over_password_error() {
    // Both fields are bad; only the first failure surfaces.
    let err = validate(&fields("", "bad", ""), AuthMode::SignIn).unwrap_err();
    assert_eq!(err, ValidationError::InvalidIdentifier);
}

#[test]
fn sign_in_ignores_name_field() {
    let creds = validate(&fields("", "a@b.com", "pw"), AuthMode::SignIn).expect("valid");
    assert_eq!(creds.display_name, None);
}

#[test]
fn whitespace_password_is_accepted_verbatim() {
    let creds = validate(&fields("", "a@b.com", " "), AuthMode::SignIn).expect("valid");
    assert_eq!(creds.password, " ");
}

// =============================================================
// Sign-up validation
// =============================================================

#[test]
fn sign_up_accepts_all_fields() {
    let creds = validate(&fields("Mira", "a@b.com", "pw"), AuthMode::SignUp).expect("valid");
    assert_eq!(creds.display_name.as_deref(), Some("Mira"));
}

#[test]
fn sign_up_rejects_blank_name_first() {
    let err = validate(&fields("", "a@b.com", "pw"), AuthMode::SignUp).unwrap_err();
    assert_eq!(err, ValidationError::MissingName);
}

#[test]
fn sign_up_rejects_whitespace_only_name() {
    let err = validate(&fields("   ", "a@b.com", "pw"), AuthMode::SignUp).unwrap_err();
    assert_eq!(err, ValidationError::MissingName);
}

#[test]
fn sign_up_name_error_wins_over_all_others() {
    let err = validate(&fields("", "bad", ""), AuthMode::SignUp).unwrap_err();
    assert_eq!(err, ValidationError::MissingName);
}

#[test]
fn sign_up_checks_email_after_name() {
    let err = validate(&fields("Mira", "bad", ""), AuthMode::SignUp).unwrap_err();
    assert_eq!(err, ValidationError::InvalidIdentifier);
}

#[test]
fn sign_up_trims_display_name() {
    let creds = validate(&fields("  Mira ", "a@b.com", "pw"), AuthMode::SignUp).expect("valid");
    assert_eq!(creds.display_name.as_deref(), Some("Mira"));
}

#[test]
fn validation_error_messages_match_form_copy() {
    assert_eq!(ValidationError::MissingName.message(), "Please enter your name.");
    assert_eq!(
        ValidationError::InvalidIdentifier.message(),
        "Please enter a valid email address."
    );
    assert_eq!(ValidationError::MissingSecret.message(), "Please enter your password.");
}
