use crate::common::SubscriptionError;

/// Checks an address typed into the newsletter form and returns it trimmed.
///
/// Validation is local only: a single `@`, a non-empty local part and a
/// dotted domain without empty labels or whitespace.
pub fn validate_email(input: &str) -> Result<String, SubscriptionError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(SubscriptionError::Empty);
    }

    let invalid = || SubscriptionError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }

    Ok(email.to_string())
}
