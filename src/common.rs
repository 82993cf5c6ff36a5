//! Common-password list management
//!
//! Handles the built-in known-weak password set and optional loading of a
//! larger list from an external file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

/// Built-in known-weak passwords, effective when no file has been loaded.
/// Entries are lowercase; membership checks lowercase the probe.
const DEFAULT_COMMON_PASSWORDS: [&str; 5] =
    ["password", "123456", "12345678", "qwerty", "abc123"];

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common-password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common-password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common-password file is empty")]
    EmptyFile,
}

/// Returns the common-password file path.
///
/// Priority:
/// 1. Environment variable `PWD_METER_COMMON_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn get_common_list_path() -> PathBuf {
    std::env::var("PWD_METER_COMMON_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-passwords.txt"))
}

/// Loads the common-password list from an external file.
///
/// Optional: without initialization the built-in default set is used.
/// Set `PWD_METER_COMMON_PATH` to specify a custom file location.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_common_list() -> Result<usize, CommonListError> {
    let path = get_common_list_path();
    init_common_list_from_path(&path)
}

/// Loads the common-password list from a specific file path.
///
/// Use this when you need to pass the path directly instead of relying on
/// environment variables.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_common_list_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, CommonListError> {
    // Idempotente: se gia inizializzata, ritorna subito
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common list initialization FAILED: FileNotFound {:?}", path);
        return Err(CommonListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Common list initialization FAILED: Empty file {:?}", path);
        return Err(CommonListError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Common list initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a cloned copy of the effective common-password set.
pub fn get_common_list() -> HashSet<String> {
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.clone(),
        None => DEFAULT_COMMON_PASSWORDS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// Checks if a password is in the common-password list (case-insensitive).
///
/// Falls back to the built-in default set if no file has been loaded.
pub fn is_common(password: &str) -> bool {
    let lowered = password.to_lowercase();
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&lowered),
        None => DEFAULT_COMMON_PASSWORDS.contains(&lowered.as_str()),
    }
}

/// Resets the list to the built-in defaults for testing purposes.
#[cfg(test)]
pub fn reset_common_list_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_common_list_path_default() {
        remove_env("PWD_METER_COMMON_PATH");

        let path = get_common_list_path();
        assert_eq!(path, PathBuf::from("./assets/common-passwords.txt"));
    }

    #[test]
    #[serial]
    fn test_get_common_list_path_from_env() {
        let custom_path = "/custom/path/common.txt";
        set_env("PWD_METER_COMMON_PATH", custom_path);

        let path = get_common_list_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_METER_COMMON_PATH");
    }

    #[test]
    #[serial]
    fn test_defaults_without_initialization() {
        reset_common_list_for_testing();
        remove_env("PWD_METER_COMMON_PATH");

        assert!(is_common("password"));
        assert!(is_common("123456"));
        assert!(is_common("12345678"));
        assert!(is_common("qwerty"));
        assert!(is_common("abc123"));
        assert!(!is_common("CorrectHorseBatteryStaple"));
    }

    #[test]
    #[serial]
    fn test_defaults_case_insensitive() {
        reset_common_list_for_testing();

        assert!(is_common("PASSWORD"));
        assert!(is_common("QwErTy"));
        assert!(is_common("Abc123"));
    }

    #[test]
    #[serial]
    fn test_init_common_list_file_not_found() {
        reset_common_list_for_testing();
        set_env("PWD_METER_COMMON_PATH", "/nonexistent/path/common.txt");

        let result = init_common_list();
        assert!(matches!(result, Err(CommonListError::FileNotFound(_))));

        remove_env("PWD_METER_COMMON_PATH");
    }

    #[test]
    #[serial]
    fn test_init_common_list_empty_file() {
        reset_common_list_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_METER_COMMON_PATH", path);

        let result = init_common_list();
        assert!(matches!(result, Err(CommonListError::EmptyFile)));

        remove_env("PWD_METER_COMMON_PATH");
    }

    #[test]
    #[serial]
    fn test_init_common_list_success() {
        reset_common_list_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "letmein").expect("Failed to write");
        writeln!(temp_file, "dragon").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_METER_COMMON_PATH", path);

        let result = init_common_list();
        assert_eq!(result.unwrap(), 2);

        // Loaded file replaces the built-in defaults
        assert!(is_common("letmein"));
        assert!(is_common("DRAGON"));
        assert!(!is_common("password"));

        reset_common_list_for_testing();
        remove_env("PWD_METER_COMMON_PATH");
    }

    #[test]
    #[serial]
    fn test_get_common_list_defaults() {
        reset_common_list_for_testing();

        let set = get_common_list();
        assert_eq!(set.len(), 5);
        assert!(set.contains("qwerty"));
    }
}
