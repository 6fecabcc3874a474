//! Denylist criterion - checks the candidate against the common-password set.

use crate::denylist::is_common_password;
use secrecy::{ExposeSecret, SecretString};

/// `true` when the candidate is NOT a known-common password.
///
/// The match is case-insensitive; the empty string is vacuously uncommon.
pub fn common_criterion(password: &SecretString) -> bool {
    !is_common_password(password.expose_secret())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_criterion_known_password() {
        let pwd = SecretString::new("password".to_string().into());
        assert!(!common_criterion(&pwd));
    }

    #[test]
    fn test_common_criterion_case_insensitive() {
        let pwd = SecretString::new("QWERTY".to_string().into());
        assert!(!common_criterion(&pwd));
    }

    #[test]
    fn test_common_criterion_uncommon_password() {
        let pwd = SecretString::new("CorrectHorseBatteryStaple!123".to_string().into());
        assert!(common_criterion(&pwd));
    }

    #[test]
    fn test_common_criterion_empty_is_uncommon() {
        let pwd = SecretString::new("".to_string().into());
        assert!(common_criterion(&pwd));
    }
}
