//! Character variety criteria - uppercase, lowercase, digit and symbol checks.

use secrecy::{ExposeSecret, SecretString};

/// `true` when the candidate contains at least one A-Z character.
pub fn upper_criterion(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

/// `true` when the candidate contains at least one a-z character.
pub fn lower_criterion(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
}

/// `true` when the candidate contains at least one 0-9 character.
pub fn digit_criterion(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// `true` when the candidate contains at least one character outside
/// A-Z, a-z and 0-9. Non-ASCII characters count as symbols.
pub fn symbol_criterion(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
}
