//! Special-character check - verifies presence of a known special character.

use secrecy::{ExposeSecret, SecretString};
use super::CheckResult;

/// The fixed special-character set. Other punctuation does not count.
pub const SPECIAL_CHARS: &str = "!@#$%^&*";

/// Checks if the password contains at least one character from
/// [`SPECIAL_CHARS`].
pub fn special_check(password: &SecretString) -> CheckResult {
    let pwd = password.expose_secret();
    if !pwd.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some("Include at least one special character (!@#$%^&*).");
    }
    None
}
