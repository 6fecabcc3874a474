//! Length criterion - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 12;

/// `true` when the candidate has at least 12 characters.
///
/// Counts Unicode code points, not bytes.
pub fn length_criterion(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_criterion_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert!(!length_criterion(&pwd));
    }

    #[test]
    fn test_length_criterion_eleven_chars() {
        let pwd = SecretString::new("abcdefghijk".to_string().into());
        assert!(!length_criterion(&pwd));
    }

    #[test]
    fn test_length_criterion_exactly_minimum() {
        let pwd = SecretString::new("abcdefghijkl".to_string().into());
        assert!(length_criterion(&pwd));
    }

    #[test]
    fn test_length_criterion_counts_code_points() {
        // 12 two-byte characters
        let pwd = SecretString::new("ääääääääääää".to_string().into());
        assert!(length_criterion(&pwd));
    }
}
