//! Local credential checks and sign-in/sign-up flow rules. Nothing here
//! talks to the network: these run before any remote call, or translate the
//! backend's replies into user-facing decisions.

/// Sentinel message the backend returns for a wrong email/password pair.
pub const INVALID_LOGIN_MESSAGE: &str = "Invalid login credentials";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// `local@domain.tld` shape: exactly one `@`, a non-empty local part, a
/// domain with a dot and non-empty segments, no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Gate for both login and signup. A failure here means no remote call is
/// made at all.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), CredentialsError> {
    if email.is_empty() || password.is_empty() {
        return Err(CredentialsError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(CredentialsError::InvalidEmail);
    }
    Ok(())
}

/// The local part of the address, seeded into the profile at signup.
pub fn username_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Translate a sign-in failure into the text shown to the user. Unknown
/// messages pass through verbatim.
pub fn map_sign_in_error(raw: &str) -> String {
    if raw == INVALID_LOGIN_MESSAGE {
        "Invalid email or password. Please check your login details or sign up.".to_string()
    } else if raw.to_lowercase().contains("email not valid") {
        "The email address is not valid.".to_string()
    } else {
        raw.to_string()
    }
}

pub fn map_sign_up_error(raw: &str) -> String {
    if raw.to_lowercase().contains("email not valid") {
        "The email address is not valid.".to_string()
    } else if raw == INVALID_LOGIN_MESSAGE {
        "Failed to create account. Please check your credentials and try again.".to_string()
    } else {
        raw.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The address already has an account. The attempt must not authenticate.
    AlreadyRegistered,
    /// Account created; a verification email gates the first sign-in.
    ConfirmationRequired,
}

/// A successful signup response that carries an empty identities list means
/// the address was already registered (the backend obfuscates duplicates this
/// way). An absent list counts as a fresh account.
pub fn classify_sign_up(identity_count: Option<usize>) -> SignUpOutcome {
    match identity_count {
        Some(0) => SignUpOutcome::AlreadyRegistered,
        _ => SignUpOutcome::ConfirmationRequired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
        assert!(is_valid_email("x@y.z"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("abc@@x"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn empty_fields_fail_before_the_email_check() {
        assert_eq!(
            validate_credentials("", "secret1"),
            Err(CredentialsError::MissingFields)
        );
        assert_eq!(
            validate_credentials("user@example.com", ""),
            Err(CredentialsError::MissingFields)
        );
        assert_eq!(
            validate_credentials("not-an-email", "secret1"),
            Err(CredentialsError::InvalidEmail)
        );
        assert_eq!(validate_credentials("user@example.com", "secret1"), Ok(()));
    }

    #[test]
    fn derives_username_from_local_part() {
        assert_eq!(username_from_email("user@example.com"), "user");
        assert_eq!(username_from_email("first.last@sub.example.co"), "first.last");
    }

    #[test]
    fn maps_known_sign_in_failures() {
        assert_eq!(
            map_sign_in_error(INVALID_LOGIN_MESSAGE),
            "Invalid email or password. Please check your login details or sign up."
        );
        assert_eq!(
            map_sign_in_error("Unable to validate email address: email not valid"),
            "The email address is not valid."
        );
        assert_eq!(
            map_sign_in_error("Email Not Valid for this project"),
            "The email address is not valid."
        );
    }

    #[test]
    fn unknown_sign_in_failures_pass_through() {
        assert_eq!(map_sign_in_error("Database error"), "Database error");
    }

    #[test]
    fn maps_known_sign_up_failures() {
        assert_eq!(
            map_sign_up_error("email not valid"),
            "The email address is not valid."
        );
        assert_eq!(
            map_sign_up_error(INVALID_LOGIN_MESSAGE),
            "Failed to create account. Please check your credentials and try again."
        );
        assert_eq!(map_sign_up_error("over quota"), "over quota");
    }

    #[test]
    fn empty_identities_mean_already_registered() {
        assert_eq!(classify_sign_up(Some(0)), SignUpOutcome::AlreadyRegistered);
        assert_eq!(
            classify_sign_up(Some(1)),
            SignUpOutcome::ConfirmationRequired
        );
        assert_eq!(classify_sign_up(None), SignUpOutcome::ConfirmationRequired);
    }
}
