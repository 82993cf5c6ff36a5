//! Random strong-password generator.

use rand::Rng;

/// Character pool for generated passwords: letters, digits and the fixed
/// special set. 70 symbols in total.
pub const CHAR_POOL: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Smallest length offered by UI length controls.
pub const MIN_LENGTH: usize = 8;

/// Largest length offered by UI length controls.
pub const MAX_LENGTH: usize = 24;

/// Default generated-password length.
pub const DEFAULT_LENGTH: usize = 12;

/// File name UI collaborators use when offering the generated password as a
/// download.
pub const DOWNLOAD_FILE_NAME: &str = "strong_password.txt";

/// Generates a random password of exactly `length` characters.
///
/// Each character is drawn independently and uniformly from [`CHAR_POOL`],
/// with replacement; there is no guarantee that every character class is
/// represented. Length 0 yields the empty string.
///
/// The [`MIN_LENGTH`]..=[`MAX_LENGTH`] range is a UI convention, not a
/// constraint of this function.
pub fn generate(length: usize) -> String {
    let pool: Vec<char> = CHAR_POOL.chars().collect();
    let mut rng = rand::rng();

    (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect()
}
