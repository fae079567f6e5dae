//! Client-side checks run before any request leaves the browser.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Input rejected before submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("E-mail is required")]
    EmailRequired,
    #[error("Enter a valid e-mail address")]
    EmailInvalid,
    #[error("Password confirmation does not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Whether the rejection is reported through a notification. An empty
    /// e-mail is only flagged inline on the field.
    pub fn notifies(self) -> bool {
        !matches!(self, Self::EmailRequired)
    }
}

/// Trim and check an e-mail address, returning the value to submit.
///
/// # Errors
///
/// `EmailRequired` when blank, `EmailInvalid` when it does not look like
/// `local@domain.tld`.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_plausible_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(email.to_owned())
}

/// # Errors
///
/// `PasswordMismatch` when the two values differ.
pub fn validate_password_pair(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // At least two labels and none empty: rejects "host", ".com", "a..b".
    let mut labels = domain.split('.');
    let label_count = labels.clone().count();
    label_count >= 2 && labels.all(|label| !label.is_empty())
}
