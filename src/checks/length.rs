//! Length check - verifies password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;

const MIN_LENGTH: usize = 8;

/// Checks if the password is at least 8 characters long.
///
/// Length is counted in characters, not bytes.
pub fn length_check(password: &SecretString) -> CheckResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some("Password should be at least 8 characters long.");
    }
    None
}
