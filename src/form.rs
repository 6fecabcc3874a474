//! Signup form validation
//!
//! Field-level checks for the signup flow. The password rule is the
//! consumer side of the strength contract: submission requires all six
//! criteria, a policy the evaluator itself never applies.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_password_strength;

/// The form field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password does not meet all requirements")]
    PasswordTooWeak,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("You must accept the terms")]
    TermsNotAccepted,
}

impl FieldError {
    /// The field whose error slot should display this message.
    pub fn field(&self) -> Field {
        match self {
            FieldError::EmailRequired | FieldError::EmailInvalid => Field::Email,
            FieldError::PasswordRequired | FieldError::PasswordTooWeak => Field::Password,
            FieldError::PasswordMismatch => Field::ConfirmPassword,
            FieldError::TermsNotAccepted => Field::Terms,
        }
    }
}

/// Current state of the signup form.
#[derive(Debug)]
pub struct SignupForm {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub accepted_terms: bool,
}

impl SignupForm {
    pub fn validate_email(&self) -> Result<(), FieldError> {
        let value = self.email.trim();
        if value.is_empty() {
            return Err(FieldError::EmailRequired);
        }
        if !is_valid_email(value) {
            return Err(FieldError::EmailInvalid);
        }
        Ok(())
    }

    /// Requires a non-empty password satisfying all six strength criteria.
    pub fn validate_password(&self) -> Result<(), FieldError> {
        if self.password.expose_secret().is_empty() {
            return Err(FieldError::PasswordRequired);
        }
        let report = evaluate_password_strength(&self.password);
        if !report.meets_all() {
            return Err(FieldError::PasswordTooWeak);
        }
        Ok(())
    }

    pub fn validate_confirm(&self) -> Result<(), FieldError> {
        let confirm = self.confirm_password.expose_secret();
        if confirm.is_empty() || confirm != self.password.expose_secret() {
            return Err(FieldError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn validate_terms(&self) -> Result<(), FieldError> {
        if !self.accepted_terms {
            return Err(FieldError::TermsNotAccepted);
        }
        Ok(())
    }

    /// Runs every field validator and collects the failures in field order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            self.validate_email(),
            self.validate_password(),
            self.validate_confirm(),
            self.validate_terms(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Validates and then simulates account creation with a fixed delay.
    #[cfg(feature = "async")]
    pub async fn submit(&self) -> Result<(), Vec<FieldError>> {
        self.validate()?;

        #[cfg(feature = "tracing")]
        tracing::info!("signup submission accepted, creating account...");

        tokio::time::sleep(SUBMIT_DELAY).await;
        Ok(())
    }
}

/// Simulated account-creation latency.
#[cfg(feature = "async")]
pub const SUBMIT_DELAY: std::time::Duration = std::time::Duration::from_millis(800);

/// Structural email check: nonempty local part, a single `@`, a host with a
/// final dot segment of at least two characters, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    let Some((local, host)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if host.contains('@') || host.chars().any(char::is_whitespace) {
        return false;
    }
    match host.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && tld.chars().count() >= 2,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn valid_form() -> SignupForm {
        SignupForm {
            email: "user@example.com".to_string(),
            password: secret("Str0ng!Passw0rd"),
            confirm_password: secret("Str0ng!Passw0rd"),
            accepted_terms: true,
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_email_required() {
        let mut form = valid_form();
        form.email = "   ".to_string();
        assert_eq!(form.validate_email(), Err(FieldError::EmailRequired));
    }

    #[test]
    fn test_email_syntax() {
        let cases = [
            ("user@example.com", true),
            ("a@b.co", true),
            ("first.last@sub.domain.io", true),
            ("plainaddress", false),
            ("@example.com", false),
            ("user@example", false),
            ("user@example.c", false),
            ("user@.com", false),
            ("user@@example.com", false),
            ("us er@example.com", false),
            ("user@exa mple.com", false),
        ];
        for (input, expected) in cases {
            assert_eq!(
                is_valid_email(input),
                expected,
                "unexpected result for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_email_invalid_error() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate_email(), Err(FieldError::EmailInvalid));
    }

    #[test]
    fn test_password_required() {
        let mut form = valid_form();
        form.password = secret("");
        assert_eq!(form.validate_password(), Err(FieldError::PasswordRequired));
    }

    #[test]
    fn test_password_must_meet_all_criteria() {
        let mut form = valid_form();
        // 5 of 6: missing a symbol
        form.password = secret("Abcdefghijk1");
        assert_eq!(form.validate_password(), Err(FieldError::PasswordTooWeak));
    }

    #[test]
    fn test_confirm_must_match() {
        let mut form = valid_form();
        form.confirm_password = secret("Different!Passw0rd");
        assert_eq!(form.validate_confirm(), Err(FieldError::PasswordMismatch));
    }

    #[test]
    fn test_empty_confirm_does_not_match() {
        let mut form = valid_form();
        form.password = secret("");
        form.confirm_password = secret("");
        assert_eq!(form.validate_confirm(), Err(FieldError::PasswordMismatch));
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut form = valid_form();
        form.accepted_terms = false;
        assert_eq!(form.validate_terms(), Err(FieldError::TermsNotAccepted));
    }

    #[test]
    fn test_validate_collects_errors_in_field_order() {
        let form = SignupForm {
            email: String::new(),
            password: secret("weak"),
            confirm_password: secret(""),
            accepted_terms: false,
        };
        assert_eq!(
            form.validate(),
            Err(vec![
                FieldError::EmailRequired,
                FieldError::PasswordTooWeak,
                FieldError::PasswordMismatch,
                FieldError::TermsNotAccepted,
            ])
        );
    }

    #[test]
    fn test_error_field_mapping() {
        assert_eq!(FieldError::EmailInvalid.field(), Field::Email);
        assert_eq!(FieldError::PasswordTooWeak.field(), Field::Password);
        assert_eq!(FieldError::PasswordMismatch.field(), Field::ConfirmPassword);
        assert_eq!(FieldError::TermsNotAccepted.field(), Field::Terms);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FieldError::PasswordTooWeak.to_string(),
            "Password does not meet all requirements"
        );
        assert_eq!(FieldError::TermsNotAccepted.to_string(), "You must accept the terms");
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_valid_form() {
        let form = SignupForm {
            email: "user@example.com".to_string(),
            password: secret("Str0ng!Passw0rd"),
            confirm_password: secret("Str0ng!Passw0rd"),
            accepted_terms: true,
        };
        assert_eq!(form.submit().await, Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_rejects_invalid_form_without_waiting() {
        let form = SignupForm {
            email: "user@example.com".to_string(),
            password: secret("weak"),
            confirm_password: secret("weak"),
            accepted_terms: true,
        };
        let before = tokio::time::Instant::now();
        let result = form.submit().await;
        assert!(result.is_err());
        // Validation failures return before the simulated delay
        assert_eq!(tokio::time::Instant::now(), before);
    }
}
