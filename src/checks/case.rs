//! Case check - verifies the password mixes uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;

/// Checks if the password contains both an uppercase and a lowercase letter.
pub fn case_check(password: &SecretString) -> CheckResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("Include both uppercase and lowercase letters.");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_check_missing_uppercase() {
        let pwd = SecretString::new("lowercase123!".to_string().into());
        assert_eq!(
            case_check(&pwd),
            Some("Include both uppercase and lowercase letters.")
        );
    }

    #[test]
    fn test_case_check_missing_lowercase() {
        let pwd = SecretString::new("UPPERCASE123!".to_string().into());
        assert_eq!(
            case_check(&pwd),
            Some("Include both uppercase and lowercase letters.")
        );
    }

    #[test]
    fn test_case_check_mixed() {
        let pwd = SecretString::new("MixedCase".to_string().into());
        assert_eq!(case_check(&pwd), None);
    }

    #[test]
    fn test_case_check_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(case_check(&pwd).is_some());
    }
}
