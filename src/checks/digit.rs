//! Digit check - verifies the password contains a decimal digit.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;

/// Checks if the password contains at least one digit (0-9).
pub fn digit_check(password: &SecretString) -> CheckResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| c.is_ascii_digit()) {
        return Some("Add at least one number (0-9).");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_check_missing() {
        let pwd = SecretString::new("NoNumbers!".to_string().into());
        assert_eq!(digit_check(&pwd), Some("Add at least one number (0-9)."));
    }

    #[test]
    fn test_digit_check_present() {
        let pwd = SecretString::new("Has1Digit".to_string().into());
        assert_eq!(digit_check(&pwd), None);
    }

    #[test]
    fn test_digit_check_only_digits() {
        let pwd = SecretString::new("1234".to_string().into());
        assert_eq!(digit_check(&pwd), None);
    }
}
