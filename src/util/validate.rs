#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Check that `input` is email-shaped: no whitespace, exactly one `@`
/// with a non-empty local part, and a domain containing an interior
/// dot. Deliverability is the server's problem.
#[must_use]
pub fn validate_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
